use rand::rngs::SmallRng;

use crate::battleship::{self, random_layout, Board, TargetContext};
use crate::common::{BoardError, Move};
use crate::config::Fleet;
use crate::tictactoe::{self, GridField, Mark};

use super::{MarkPlayer, Player, Setup};

/// Computer opponent for both games.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<Setup, BoardError> {
        random_layout(rng, board, fleet)?;
        Ok(Setup::Placed)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        ctx: &TargetContext<'_>,
    ) -> Result<Move, BoardError> {
        battleship::select_target(ctx, rng).map(Move::Play)
    }
}

impl MarkPlayer for AiPlayer {
    fn select_cell(
        &mut self,
        rng: &mut SmallRng,
        field: &GridField,
        me: Mark,
    ) -> Result<Move, BoardError> {
        tictactoe::select_cell(field, me, rng).map(Move::Play)
    }
}
