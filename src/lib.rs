pub mod battleship;
mod cellset;
mod common;
mod config;
mod logging;
mod player;
pub mod tictactoe;
pub mod ui;

pub use cellset::{CellSet, CellSetError, Cells};
pub use common::*;
pub use config::*;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
