//! Move sources for both games.
//!
//! A game loop never cares whether a move comes from a person at the
//! terminal or from a heuristic; it asks a [`Player`] (battleship) or a
//! [`MarkPlayer`] (tic-tac-toe) and applies whatever comes back.
//! - AiPlayer: the fixed heuristics
//! - CliPlayer: interactive console input

use rand::rngs::SmallRng;

use crate::battleship::{Board, ShotResult, TargetContext};
use crate::common::{BoardError, Coordinate, Move};
use crate::config::Fleet;
use crate::tictactoe::{GridField, Mark};

/// Result of a fleet placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    Placed,
    Quit,
}

/// Interface implemented by battleship move sources.
pub trait Player {
    /// Place the whole fleet on `board`.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<Setup, BoardError>;

    /// Choose the next coordinate to shoot at.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        ctx: &TargetContext<'_>,
    ) -> Result<Move, BoardError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: &ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _result: &ShotResult) {}
}

/// Interface implemented by tic-tac-toe move sources.
pub trait MarkPlayer {
    /// Choose an empty cell for `me`.
    fn select_cell(
        &mut self,
        rng: &mut SmallRng,
        field: &GridField,
        me: Mark,
    ) -> Result<Move, BoardError>;

    /// Inform the player of any move, its own included.
    fn handle_move(&mut self, _mark: Mark, _cell: Coordinate, _field: &GridField) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::{parse_coord, parse_placement, CliPlayer, QUIT};
