use gridgames::{BoardError, CellSet, CellSetError, Coordinate};

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_size_limited_by_backing_integer() {
    assert_eq!(
        CellSet::<u8>::empty(3).unwrap_err(),
        CellSetError::SizeTooLarge {
            size: 3,
            capacity: 8
        }
    );
    assert!(CellSet::<u16>::full(4).is_ok());
    assert!(CellSet::<u128>::full(11).is_ok());
    assert!(CellSet::<u128>::empty(12).is_err());

    let err: BoardError = CellSet::<u8>::full(3).unwrap_err().into();
    assert!(matches!(err, BoardError::CellSet(_)));
}

#[test]
fn test_full_set_covers_grid_exactly() {
    let set: CellSet = CellSet::full(6).unwrap();
    assert_eq!(set.len(), 36);
    assert_eq!(set.size(), 6);
    assert!(set.contains(c(5, 5)));
    assert!(!set.contains(c(6, 0)));
    assert!(!set.contains(c(0, -1)));

    let exact = CellSet::<u16>::full(4).unwrap();
    assert_eq!(exact.len(), 16);
}

#[test]
fn test_remove_shrinks_the_set() {
    let mut set = CellSet::<u64>::full(5).unwrap();
    assert_eq!(set.len(), 25);
    assert!(set.remove(c(2, 3)));
    assert!(!set.remove(c(2, 3)));
    assert!(!set.contains(c(2, 3)));
    assert!(!set.remove(c(-1, 2)));
    assert!(!set.remove(c(5, 0)));
    assert_eq!(set.len(), 24);

    let mut empty = CellSet::<u64>::empty(5).unwrap();
    assert!(empty.is_empty());
    assert!(!empty.remove(c(0, 0)));
}

fn only(size: usize, keep: &[Coordinate]) -> CellSet<u32> {
    let mut set = CellSet::<u32>::full(size).unwrap();
    let all: Vec<Coordinate> = set.iter().collect();
    for cell in all {
        if !keep.contains(&cell) {
            set.remove(cell);
        }
    }
    set
}

#[test]
fn test_iteration_is_row_major() {
    let set = only(4, &[c(3, 0), c(0, 2), c(1, 1), c(0, 0)]);
    let cells: Vec<Coordinate> = set.iter().collect();
    assert_eq!(cells, vec![c(0, 0), c(0, 2), c(1, 1), c(3, 0)]);
}

#[test]
fn test_debug_draws_grid() {
    let mut set = CellSet::<u16>::full(2).unwrap();
    for cell in [c(0, 0), c(1, 0), c(1, 1)] {
        set.remove(cell);
    }
    assert_eq!(format!("{:?}", set), "CellSet<2>:\n□ ■ \n□ □ \n");
}
