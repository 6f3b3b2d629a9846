use std::io::{self, Cursor};

use gridgames::battleship::{BattleshipGame, Board, Orientation, TargetContext};
use gridgames::tictactoe::{GridField, Mark, TicTacToeGame};
use gridgames::{
    parse_coord, parse_placement, AiPlayer, BattleshipConfig, CliPlayer, Coordinate, Fleet,
    GameState, InputError, MarkPlayer, Move, Player, Setup,
};
use rand::{rngs::SmallRng, SeedableRng};

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_parse_coord_accepts_common_forms() {
    assert_eq!(parse_coord("B2", 6), Ok(c(1, 1)));
    assert_eq!(parse_coord("b2", 6), Ok(c(1, 1)));
    assert_eq!(parse_coord("  c 4 ", 6), Ok(c(2, 3)));
    assert_eq!(parse_coord("2 2", 6), Ok(c(1, 1)));
    assert_eq!(parse_coord("A10", 10), Ok(c(0, 9)));
    assert_eq!(parse_coord("F6", 6), Ok(c(5, 5)));
}

#[test]
fn test_parse_coord_rejects_bad_input() {
    for bad in ["", "B", "G1", "A7", "A0", "0 1", "?2", "AB 2", "A x"] {
        assert!(
            matches!(parse_coord(bad, 6), Err(InputError::Malformed(_))),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn test_parse_placement_orientation() {
    assert_eq!(
        parse_placement("B2-", 6),
        Ok((c(1, 1), Orientation::Horizontal))
    );
    assert_eq!(parse_placement("B2", 6), Ok((c(1, 1), Orientation::Vertical)));
    assert_eq!(
        parse_placement(" a 3 - ", 6),
        Ok((c(0, 2), Orientation::Horizontal))
    );
    assert!(parse_placement("-", 6).is_err());
}

fn view(size: usize) -> Board {
    let config = BattleshipConfig::new(size, Fleet::new([(1, 1)])).unwrap();
    Board::new(&config).unwrap()
}

#[test]
fn test_cli_target_reprompts_until_available() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut view = view(6);
    view.take_target(c(0, 0));
    let mut out = Vec::new();
    let mut player = CliPlayer::new(Cursor::new("Z9\nA1\nB2\n"), &mut out);
    let ctx = TargetContext {
        view: &view,
        pending_hunt: None,
    };
    assert_eq!(
        Player::select_target(&mut player, &mut rng, &ctx).unwrap(),
        Move::Play(c(1, 1))
    );
    drop(player);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('✗').count(), 2);
    assert!(text.contains("A1 is not available"));
}

#[test]
fn test_cli_quit_and_end_of_input() {
    let mut rng = SmallRng::seed_from_u64(0);
    let view = view(6);
    let ctx = TargetContext {
        view: &view,
        pending_hunt: None,
    };

    let mut player = CliPlayer::new(Cursor::new(":q\n"), io::sink());
    assert_eq!(
        Player::select_target(&mut player, &mut rng, &ctx).unwrap(),
        Move::Quit
    );

    let mut player = CliPlayer::new(Cursor::new(""), io::sink());
    assert_eq!(
        Player::select_target(&mut player, &mut rng, &ctx).unwrap(),
        Move::Quit
    );

    let mut player = CliPlayer::new(Cursor::new(":Q\n"), io::sink());
    assert_eq!(
        player
            .select_cell(&mut rng, &GridField::new(), Mark::X)
            .unwrap(),
        Move::Quit
    );
}

#[test]
fn test_cli_cell_must_be_empty() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut field = GridField::new();
    field.place(c(1, 1), Mark::O).unwrap();
    let mut player = CliPlayer::new(Cursor::new("B2\nD1\nA3\n"), io::sink());
    assert_eq!(
        player.select_cell(&mut rng, &field, Mark::X).unwrap(),
        Move::Play(c(0, 2))
    );
}

#[test]
fn test_cli_manual_placement() {
    let mut rng = SmallRng::seed_from_u64(0);
    let config = BattleshipConfig::new(6, Fleet::new([(3, 1), (1, 1)])).unwrap();
    let mut board = Board::new(&config).unwrap();
    let mut out = Vec::new();
    let mut player = CliPlayer::new(Cursor::new("A1-\nA2\nC3\n"), &mut out);

    let setup = player
        .place_fleet(&mut rng, &mut board, &config.fleet)
        .unwrap();
    assert_eq!(setup, Setup::Placed);
    assert_eq!(board.ships().len(), 2);
    assert_eq!(board.find_ship(c(0, 2)), Some(0));
    assert_eq!(board.find_ship(c(2, 2)), Some(1));

    drop(player);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("3-deck ship #1 (Cruiser):"));
    assert!(text.contains("1-deck ship #1 (Submarine):"));
    assert!(text.contains("A2 is busy"));
}

#[test]
fn test_cli_manual_placement_random_and_quit() {
    let mut rng = SmallRng::seed_from_u64(9);
    let config = BattleshipConfig::new(6, Fleet::new([(2, 2)])).unwrap();

    let mut board = Board::new(&config).unwrap();
    let mut player = CliPlayer::new(Cursor::new("\n\n"), io::sink());
    assert_eq!(
        player
            .place_fleet(&mut rng, &mut board, &config.fleet)
            .unwrap(),
        Setup::Placed
    );
    assert_eq!(board.ships().len(), 2);

    let mut board = Board::new(&config).unwrap();
    let mut player = CliPlayer::new(Cursor::new("A1\n:q\n"), io::sink());
    assert_eq!(
        player
            .place_fleet(&mut rng, &mut board, &config.fleet)
            .unwrap(),
        Setup::Quit
    );
}

#[test]
fn test_battleship_cancelled_from_console() {
    let human = CliPlayer::new(Cursor::new(":q\n"), io::sink()).with_auto_place(true);
    let mut game = BattleshipGame::new(
        BattleshipConfig::default(),
        Box::new(human),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(1),
    )
    .unwrap();
    assert_eq!(game.run().unwrap(), GameState::Cancelled);
    assert_eq!(game.winner(), None);
    assert!(game.shots().is_empty());
}

#[test]
fn test_tictactoe_cancelled_from_console() {
    let human = CliPlayer::new(Cursor::new("A1\n:q\n"), io::sink());
    let mut game = TicTacToeGame::new(
        Box::new(human),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(1),
    );
    assert_eq!(game.run().unwrap(), GameState::Cancelled);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.move_log().len(), 2);
    assert_eq!(game.move_log()[0], (Mark::X, c(0, 0)));
    assert_eq!(game.move_log()[1], (Mark::O, GridField::center()));
}

#[test]
fn test_cli_manual_placement_starts_over_when_board_fills() {
    let mut rng = SmallRng::seed_from_u64(0);
    let config = BattleshipConfig::new(3, Fleet::new([(1, 4)])).unwrap();
    let mut board = Board::new(&config).unwrap();
    let mut out = Vec::new();
    // a submarine in the middle blocks the whole 3x3 board
    let script = "B2\nA1\nA1\nA3\nC1\nC3\n";
    let mut player = CliPlayer::new(Cursor::new(script), &mut out);

    let setup = player
        .place_fleet(&mut rng, &mut board, &config.fleet)
        .unwrap();
    assert_eq!(setup, Setup::Placed);
    assert_eq!(board.ships().len(), 4);
    assert_eq!(board.find_ship(c(1, 1)), None);
    for corner in [c(0, 0), c(0, 2), c(2, 0), c(2, 2)] {
        assert!(board.find_ship(corner).is_some(), "{} should hold a ship", corner);
    }

    drop(player);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Starting over").count(), 1);
    assert_eq!(text.matches("1-deck ship #1 (Submarine):").count(), 2);
    assert!(text.contains("1-deck ship #4 (Submarine):"));
}
