//! Battleship with no-touching placement and a hunt-around-hit opponent.

pub mod ai;
pub mod board;
pub mod game;
pub mod placement;
pub mod ship;

pub use ai::{select_target, TargetContext, HUNT_OFFSETS};
pub use board::{contour_cells, Board, Cell, ShotResult};
pub use game::{BattleshipGame, ShotRecord, Side};
pub use placement::{is_complete, place_random_ship, random_layout};
pub use ship::{Orientation, Ship};
