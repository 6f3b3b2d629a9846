//! Read-only text rendering of boards, fields and results.

use std::fmt::Write;

use crate::battleship::{Board, Cell, ShotResult};
use crate::common::Coordinate;
use crate::config::FIELD_SIZE;
use crate::tictactoe::{GridField, Mark, Outcome};

/// Glyph drawn for a battleship cell.
pub fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship => 'S',
        Cell::Contour => '-',
        Cell::Damaged => 'x',
        Cell::Destroyed => 'X',
        Cell::Miss => 'o',
    }
}

fn row_label(r: usize) -> char {
    (b'A' + r as u8) as char
}

fn board_lines(board: &Board) -> Vec<String> {
    let n = board.size();
    let mut lines = Vec::with_capacity(n + 1);
    let mut header = String::from("   ");
    for c in 1..=n {
        let _ = write!(header, "{:>3}", c);
    }
    lines.push(header);
    for r in 0..n {
        let mut line = format!(" {} ", row_label(r));
        for c in 0..n {
            let cell = board
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            let _ = write!(line, "{:>3}", cell_glyph(cell));
        }
        lines.push(line);
    }
    lines
}

/// A single board with row letters and column numbers.
pub fn render_board(board: &Board) -> String {
    let mut out = board_lines(board).join("\n");
    out.push('\n');
    out
}

/// The player's own board next to its view of the opponent.
///
/// `fleet_size` is the configured number of ships, used to count the
/// opponent ships still afloat.
pub fn render_boards(own: &Board, view: &Board, fleet_size: usize) -> String {
    let left = board_lines(own);
    let right = board_lines(view);
    let width = left.iter().map(String::len).max().unwrap_or(0) + 6;
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}{}", "Your grid:", "Opponent's grid:", width = width);
    for (l, r) in left.iter().zip(right.iter()) {
        let _ = writeln!(out, "{:<width$}{}", l, r, width = width);
    }
    let afloat = format!("{} ships afloat", own.ships().len());
    let enemy_afloat = fleet_size.saturating_sub(view.known_ships().len());
    let _ = writeln!(
        out,
        "{:<width$}{} ships afloat",
        afloat,
        enemy_afloat,
        width = width
    );
    if !view.known_ships().is_empty() {
        let sunk: Vec<String> = view
            .known_ships()
            .iter()
            .map(|s| format!("{} at {}", s.class(), s.anchor()))
            .collect();
        let _ = writeln!(out, "Sunk so far: {}", sunk.join(", "));
    }
    out
}

/// Announcement for a resolved shot. `who` is the shooter's name.
pub fn describe_shot(who: &str, target: Coordinate, result: &ShotResult) -> String {
    match result {
        ShotResult::Miss => format!("{} shot at {} and missed.", who, target),
        ShotResult::Damaged(_) => format!("{} shot at {} and hit a warship!", who, target),
        ShotResult::Destroyed(ship) => {
            format!("{} shot at {} and sunk a {}!", who, target, ship.class())
        }
    }
}

/// The tic-tac-toe field with row letters and column numbers.
pub fn render_field(field: &GridField) -> String {
    let mut out = String::from("  |");
    for c in 1..=FIELD_SIZE {
        let _ = write!(out, "{:>3}", c);
    }
    out.push('\n');
    out.push_str(&"-".repeat(4 + 3 * FIELD_SIZE));
    out.push('\n');
    for r in 0..FIELD_SIZE {
        let _ = write!(out, "{} |", row_label(r));
        for c in 0..FIELD_SIZE {
            let glyph = match field.get(Coordinate::new(r as i32, c as i32)) {
                Some(Mark::X) => 'X',
                Some(Mark::O) => 'O',
                None => ' ',
            };
            let _ = write!(out, "{:>3}", glyph);
        }
        out.push('\n');
    }
    out
}

/// Closing message of a tic-tac-toe game; `None` means it was cancelled.
pub fn tictactoe_result(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::Tie) => "The game ended in a tie.",
        Some(Outcome::Win(Mark::X)) => "Xs won!",
        Some(Outcome::Win(Mark::O)) => "Os won!",
        None => "The game was cancelled",
    }
}

/// Move log as `X:B2 O:A1 ...`.
pub fn render_move_log(log: &[(Mark, Coordinate)]) -> String {
    log.iter()
        .map(|(mark, c)| format!("{}:{}", mark, c))
        .collect::<Vec<_>>()
        .join(" ")
}
