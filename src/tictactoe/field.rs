//! The 3×3 tic-tac-toe playing field and win detection.

use core::fmt;

use crate::common::{BoardError, Coordinate};
use crate::config::FIELD_SIZE;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Terminal result of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Tie,
}

/// Mutable 3×3 grid of optional marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridField {
    cells: [[Option<Mark>; FIELD_SIZE]; FIELD_SIZE],
}

impl GridField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center() -> Coordinate {
        let mid = (FIELD_SIZE / 2) as i32;
        Coordinate::new(mid, mid)
    }

    /// Mark at `c`, or `None` when empty or off the field.
    pub fn get(&self, c: Coordinate) -> Option<Mark> {
        c.index(FIELD_SIZE).and_then(|(r, col)| self.cells[r][col])
    }

    pub fn is_empty_cell(&self, c: Coordinate) -> bool {
        matches!(c.index(FIELD_SIZE), Some((r, col)) if self.cells[r][col].is_none())
    }

    /// Put `mark` on an empty cell.
    pub fn place(&mut self, c: Coordinate, mark: Mark) -> Result<(), BoardError> {
        let (r, col) = c.index(FIELD_SIZE).ok_or(BoardError::OutOfBounds(c))?;
        if self.cells[r][col].is_some() {
            return Err(BoardError::BoardConflict(c));
        }
        self.cells[r][col] = Some(mark);
        Ok(())
    }

    /// Copy of the field with `mark` placed at `c`, used to look one move ahead.
    pub fn with(&self, c: Coordinate, mark: Mark) -> GridField {
        let mut next = *self;
        if let Some((r, col)) = c.index(FIELD_SIZE) {
            next.cells[r][col] = Some(mark);
        }
        next
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        all_cells().filter(move |&c| self.is_empty_cell(c))
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Row, column and diagonal lines of the field.
    pub fn lines() -> impl Iterator<Item = [Coordinate; FIELD_SIZE]> {
        let n = FIELD_SIZE as i32;
        let rows = (0..n).map(move |r| -> [Coordinate; FIELD_SIZE] {
            core::array::from_fn(|i| Coordinate::new(r, i as i32))
        });
        let cols = (0..n).map(move |c| -> [Coordinate; FIELD_SIZE] {
            core::array::from_fn(|i| Coordinate::new(i as i32, c))
        });
        let main: [Coordinate; FIELD_SIZE] =
            core::array::from_fn(|i| Coordinate::new(i as i32, i as i32));
        let anti: [Coordinate; FIELD_SIZE] =
            core::array::from_fn(|i| Coordinate::new(i as i32, n - 1 - i as i32));
        rows.chain(cols).chain([main, anti])
    }

    /// Winner if some line is filled by one mark, tie when the field is full,
    /// `None` while the game goes on.
    pub fn check_win(&self) -> Option<Outcome> {
        for line in Self::lines() {
            for mark in [Mark::X, Mark::O] {
                if line.iter().all(|&c| self.get(c) == Some(mark)) {
                    return Some(Outcome::Win(mark));
                }
            }
        }
        if self.empty_cells().next().is_none() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }
}

/// All cells of the field in row-major order.
pub fn all_cells() -> impl Iterator<Item = Coordinate> {
    let n = FIELD_SIZE as i32;
    (0..n).flat_map(move |r| (0..n).map(move |c| Coordinate::new(r, c)))
}
