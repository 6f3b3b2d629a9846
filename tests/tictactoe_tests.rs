use gridgames::tictactoe::{ranks, select_cell, GridField, Mark, Outcome, Rank, TicTacToeGame};
use gridgames::{AiPlayer, BoardError, Coordinate, GameState};
use rand::{rngs::SmallRng, SeedableRng};

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn field(moves: &[(Mark, (i32, i32))]) -> GridField {
    let mut field = GridField::new();
    for &(mark, (row, col)) in moves {
        field.place(c(row, col), mark).unwrap();
    }
    field
}

#[test]
fn test_check_win() {
    assert_eq!(GridField::new().check_win(), None);

    let row = field(&[(Mark::X, (1, 0)), (Mark::X, (1, 1)), (Mark::X, (1, 2))]);
    assert_eq!(row.check_win(), Some(Outcome::Win(Mark::X)));

    let col = field(&[(Mark::O, (0, 2)), (Mark::O, (1, 2)), (Mark::O, (2, 2))]);
    assert_eq!(col.check_win(), Some(Outcome::Win(Mark::O)));

    let anti = field(&[(Mark::O, (0, 2)), (Mark::O, (1, 1)), (Mark::O, (2, 0))]);
    assert_eq!(anti.check_win(), Some(Outcome::Win(Mark::O)));

    // X O X / X O O / O X X
    let tie = field(&[
        (Mark::X, (0, 0)),
        (Mark::O, (0, 1)),
        (Mark::X, (0, 2)),
        (Mark::X, (1, 0)),
        (Mark::O, (1, 1)),
        (Mark::O, (1, 2)),
        (Mark::O, (2, 0)),
        (Mark::X, (2, 1)),
        (Mark::X, (2, 2)),
    ]);
    assert_eq!(tie.check_win(), Some(Outcome::Tie));

    let open = field(&[(Mark::X, (0, 0)), (Mark::O, (1, 1))]);
    assert_eq!(open.check_win(), None);
}

#[test]
fn test_place_rejects_taken_and_outside_cells() {
    let mut field = GridField::new();
    field.place(c(0, 0), Mark::X).unwrap();
    assert_eq!(
        field.place(c(0, 0), Mark::O),
        Err(BoardError::BoardConflict(c(0, 0)))
    );
    assert_eq!(
        field.place(c(3, 0), Mark::O),
        Err(BoardError::OutOfBounds(c(3, 0)))
    );
    assert_eq!(field.occupied(), 1);
}

#[test]
fn test_ai_completes_its_line() {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = field(&[
        (Mark::X, (0, 0)),
        (Mark::O, (1, 0)),
        (Mark::X, (0, 1)),
        (Mark::O, (2, 2)),
    ]);
    assert_eq!(select_cell(&field, Mark::X, &mut rng).unwrap(), c(0, 2));
}

#[test]
fn test_ai_blocks_opponent_line() {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = field(&[(Mark::X, (0, 0)), (Mark::O, (1, 1)), (Mark::X, (2, 0))]);
    assert_eq!(select_cell(&field, Mark::O, &mut rng).unwrap(), c(1, 0));
}

#[test]
fn test_ai_prefers_win_over_block() {
    let mut rng = SmallRng::seed_from_u64(1);
    // X threatens column 0, O can finish row 1
    let field = field(&[
        (Mark::X, (0, 0)),
        (Mark::O, (1, 1)),
        (Mark::X, (2, 0)),
        (Mark::O, (1, 2)),
        (Mark::X, (0, 2)),
    ]);
    assert_eq!(select_cell(&field, Mark::O, &mut rng).unwrap(), c(1, 0));

    // both can finish a line; O finishes its own
    let field = field_with_two_threats();
    assert_eq!(select_cell(&field, Mark::O, &mut rng).unwrap(), c(2, 2));
}

fn field_with_two_threats() -> GridField {
    // X X . / . . . / O O .
    field(&[
        (Mark::X, (0, 0)),
        (Mark::O, (2, 0)),
        (Mark::X, (0, 1)),
        (Mark::O, (2, 1)),
    ])
}

#[test]
fn test_ai_takes_center_on_empty_field() {
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(
            select_cell(&GridField::new(), Mark::X, &mut rng).unwrap(),
            GridField::center()
        );
    }
}

#[test]
fn test_ai_answers_center_with_corner() {
    let corners = [c(0, 0), c(0, 2), c(2, 0), c(2, 2)];
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = field(&[(Mark::X, (1, 1))]);
        let got = select_cell(&field, Mark::O, &mut rng).unwrap();
        assert!(corners.contains(&got), "{} is not a corner", got);
    }
}

#[test]
fn test_ai_fails_on_full_field() {
    let mut rng = SmallRng::seed_from_u64(1);
    let full = field(&[
        (Mark::X, (0, 0)),
        (Mark::O, (0, 1)),
        (Mark::X, (0, 2)),
        (Mark::X, (1, 0)),
        (Mark::O, (1, 1)),
        (Mark::O, (1, 2)),
        (Mark::O, (2, 0)),
        (Mark::X, (2, 1)),
        (Mark::X, (2, 2)),
    ]);
    assert!(matches!(
        select_cell(&full, Mark::X, &mut rng),
        Err(BoardError::InvariantViolation(_))
    ));
}

#[test]
fn test_ranks_on_empty_field() {
    let ranked = ranks(&GridField::new());
    assert_eq!(ranked.len(), 9);
    assert_eq!(ranked[&c(1, 1)], Rank { x: 4, o: 4 });
    for corner in [c(0, 0), c(0, 2), c(2, 0), c(2, 2)] {
        assert_eq!(ranked[&corner], Rank { x: 3, o: 3 });
    }
    for edge in [c(0, 1), c(1, 0), c(1, 2), c(2, 1)] {
        assert_eq!(ranked[&edge], Rank { x: 2, o: 2 });
    }
}

#[test]
fn test_ranks_skip_blocked_lines() {
    let field = field(&[(Mark::X, (1, 1))]);
    let ranked = ranks(&field);
    assert!(!ranked.contains_key(&c(1, 1)));
    assert_eq!(ranked[&c(0, 0)], Rank { x: 3, o: 2 });
    assert_eq!(ranked[&c(0, 1)], Rank { x: 2, o: 1 });
    assert_eq!(ranked[&c(0, 0)].for_mark(Mark::O), 2);
}

#[test]
fn test_ai_vs_ai_game_finishes() {
    for seed in 0..10 {
        let mut game = TicTacToeGame::new(
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
            SmallRng::seed_from_u64(seed),
        );
        assert_eq!(game.state(), GameState::Setup);
        assert_eq!(game.run().unwrap(), GameState::Finished);
        assert!(game.outcome().is_some());
        assert_eq!(game.field().occupied(), game.move_log().len());

        let log = game.move_log();
        assert_eq!(log[0], (Mark::X, GridField::center()));
        for (i, &(mark, _)) in log.iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(mark, expected);
        }
        if let Some(Outcome::Win(mark)) = game.outcome() {
            assert_eq!(log.last().unwrap().0, mark);
        }
    }
}
