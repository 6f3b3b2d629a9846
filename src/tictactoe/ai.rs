// Heuristic tic-tac-toe opponent: win, block, center, then fork by rank.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{BoardError, Coordinate};
use crate::tictactoe::field::{GridField, Mark, Outcome};
use crate::tictactoe::rank::ranks;

/// First empty cell, row-major, where `mark` completes a line.
fn winning_cell(field: &GridField, mark: Mark) -> Option<Coordinate> {
    field
        .empty_cells()
        .find(|&c| field.with(c, mark).check_win() == Some(Outcome::Win(mark)))
}

/// Choose a cell for `me`.
///
/// Rules in priority order: complete own line, block the opponent's line,
/// take the center, otherwise pick uniformly among the cells with the highest
/// rank for `me`. Fails only when the field has no empty cell.
pub fn select_cell<R: Rng + ?Sized>(
    field: &GridField,
    me: Mark,
    rng: &mut R,
) -> Result<Coordinate, BoardError> {
    if let Some(c) = winning_cell(field, me) {
        debug!("{} wins at {}", me, c);
        return Ok(c);
    }
    if let Some(c) = winning_cell(field, me.opponent()) {
        debug!("{} blocks at {}", me, c);
        return Ok(c);
    }
    let center = GridField::center();
    if field.is_empty_cell(center) {
        return Ok(center);
    }

    let ranked = ranks(field);
    let best = ranked
        .values()
        .map(|r| r.for_mark(me))
        .max()
        .ok_or(BoardError::InvariantViolation("no empty cell left for a move"))?;
    let candidates: Vec<Coordinate> = ranked
        .iter()
        .filter(|(_, r)| r.for_mark(me) == best)
        .map(|(&c, _)| c)
        .collect();
    debug!("{} fork candidates with rank {}: {:?}", me, best, candidates);
    candidates
        .choose(rng)
        .copied()
        .ok_or(BoardError::InvariantViolation("no empty cell left for a move"))
}
