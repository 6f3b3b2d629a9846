//! Tic-tac-toe against a rank-based heuristic.

pub mod ai;
pub mod field;
pub mod game;
pub mod rank;

pub use ai::select_cell;
pub use field::{all_cells, GridField, Mark, Outcome};
pub use game::TicTacToeGame;
pub use rank::{ranks, Rank};
