//! Automatic fleet placement.
//!
//! Ships are placed longest first at random anchors drawn from the placement
//! set. When a ship no longer fits anywhere the whole layout is thrown away
//! and started again instead of backtracking single ships.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::battleship::board::Board;
use crate::battleship::ship::{Orientation, Ship};
use crate::common::{BoardError, Coordinate};
use crate::config::{Fleet, MAX_PLACEMENT_RESTARTS};

/// Place one ship of `length` at a random free spot.
///
/// Every available anchor is tried in both orientations, in random order.
/// Returns `OutOfSpace` when none fits.
pub fn place_random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    length: usize,
) -> Result<Ship, BoardError> {
    if board.placement_set().is_empty() {
        return Err(BoardError::OutOfSpace);
    }
    let mut candidates: Vec<(Coordinate, Orientation)> = board
        .placement_set()
        .iter()
        .flat_map(|c| [(c, Orientation::Horizontal), (c, Orientation::Vertical)])
        .collect();
    candidates.shuffle(rng);
    for (anchor, orientation) in candidates {
        let ship = Ship::new(length, anchor, orientation)?;
        match board.add_ship(ship) {
            Ok(()) => return Ok(ship),
            Err(BoardError::BoardConflict(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::OutOfSpace)
}

fn try_layout<R: Rng + ?Sized>(rng: &mut R, board: &mut Board, fleet: &Fleet) -> Result<(), BoardError> {
    for length in fleet.ships() {
        place_random_ship(rng, board, length)?;
    }
    Ok(())
}

/// Lay out the whole fleet at random, restarting from an empty board
/// whenever a ship cannot be placed. Returns the number of attempts used.
pub fn random_layout<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    fleet: &Fleet,
) -> Result<usize, BoardError> {
    for attempt in 1..=MAX_PLACEMENT_RESTARTS {
        board.reset()?;
        match try_layout(rng, board, fleet) {
            Ok(()) => {
                debug!("fleet placed after {} attempt(s)", attempt);
                return if is_complete(board, fleet) {
                    Ok(attempt)
                } else {
                    Err(BoardError::InvariantViolation("layout finished with ships missing"))
                };
            }
            Err(BoardError::OutOfSpace) => {
                debug!("layout attempt {} ran out of space, restarting", attempt);
            }
            Err(e) => return Err(e),
        }
    }
    warn!(
        "could not place fleet {} after {} attempts",
        fleet, MAX_PLACEMENT_RESTARTS
    );
    Err(BoardError::OutOfSpace)
}

/// A layout is complete when it holds exactly the configured number of ships.
pub fn is_complete(board: &Board, fleet: &Fleet) -> bool {
    board.ships().len() == fleet.ship_count()
}
