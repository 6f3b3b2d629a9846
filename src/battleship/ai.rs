// Hunt-around-hit targeting: probe the orthogonal neighbours of the last
// unresolved hit, otherwise shoot uniformly at random.

use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::battleship::board::Board;
use crate::common::{BoardError, Coordinate};

/// Offsets probed around a pending hit, in order: row above, row below,
/// column left, column right.
pub const HUNT_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(-1, 0),
    Coordinate::new(1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
];

/// What a shooter knows when choosing a target.
#[derive(Clone, Copy)]
pub struct TargetContext<'a> {
    /// The shooter's picture of the opponent board; its target set lists
    /// every coordinate still worth a shot.
    pub view: &'a Board,
    /// Last hit that did not destroy a ship, if the hunt is still open.
    pub pending_hunt: Option<Coordinate>,
}

/// Choose the next coordinate to shoot at.
///
/// Errors only when the target set is empty, which a correctly maintained
/// board never allows while ships remain.
pub fn select_target<R: Rng + ?Sized>(
    ctx: &TargetContext<'_>,
    rng: &mut R,
) -> Result<Coordinate, BoardError> {
    let targets = ctx.view.targets();
    if let Some(hit) = ctx.pending_hunt {
        if let Some(next) = HUNT_OFFSETS
            .iter()
            .map(|&offset| hit + offset)
            .find(|&c| targets.contains(c))
        {
            debug!("hunting around {}: {}", hit, next);
            return Ok(next);
        }
        debug!("hunt around {} exhausted", hit);
    }
    targets
        .iter()
        .choose(rng)
        .ok_or(BoardError::InvariantViolation("no targets left to shoot at"))
}
