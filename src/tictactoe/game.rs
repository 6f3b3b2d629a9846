use log::{debug, info};
use rand::rngs::SmallRng;

use crate::common::{BoardError, Coordinate, GameState, Move};
use crate::player::MarkPlayer;
use crate::tictactoe::field::{GridField, Mark, Outcome};

/// Tic-tac-toe game loop. X always moves first.
pub struct TicTacToeGame {
    field: GridField,
    x_player: Box<dyn MarkPlayer>,
    o_player: Box<dyn MarkPlayer>,
    turn: Mark,
    state: GameState,
    outcome: Option<Outcome>,
    log: Vec<(Mark, Coordinate)>,
    rng: SmallRng,
}

impl TicTacToeGame {
    pub fn new(x_player: Box<dyn MarkPlayer>, o_player: Box<dyn MarkPlayer>, rng: SmallRng) -> Self {
        Self {
            field: GridField::new(),
            x_player,
            o_player,
            turn: Mark::X,
            state: GameState::Setup,
            outcome: None,
            log: Vec::new(),
            rng,
        }
    }

    pub fn field(&self) -> &GridField {
        &self.field
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Win or tie once finished; `None` while playing or after a quit.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Every move played so far, in order.
    pub fn move_log(&self) -> &[(Mark, Coordinate)] {
        &self.log
    }

    /// Play a single move. Returns the state after the move.
    pub fn step(&mut self) -> Result<GameState, BoardError> {
        match self.state {
            GameState::Setup => {
                info!("tic-tac-toe started");
                self.state = GameState::InProgress;
            }
            GameState::Finished | GameState::Cancelled => return Ok(self.state),
            GameState::InProgress => {}
        }

        let mark = self.turn;
        let player = match mark {
            Mark::X => &mut self.x_player,
            Mark::O => &mut self.o_player,
        };
        let cell = match player.select_cell(&mut self.rng, &self.field, mark)? {
            Move::Quit => {
                info!("tic-tac-toe cancelled by {}", mark);
                self.state = GameState::Cancelled;
                return Ok(self.state);
            }
            Move::Play(cell) => cell,
        };

        self.field.place(cell, mark)?;
        self.log.push((mark, cell));
        debug!("{} plays {}", mark, cell);
        self.x_player.handle_move(mark, cell, &self.field);
        self.o_player.handle_move(mark, cell, &self.field);

        match self.field.check_win() {
            Some(outcome) => {
                info!("tic-tac-toe finished: {:?}", outcome);
                self.outcome = Some(outcome);
                self.state = GameState::Finished;
            }
            None => self.turn = mark.opponent(),
        }
        Ok(self.state)
    }

    /// Play until the game finishes or a player quits.
    pub fn run(&mut self) -> Result<GameState, BoardError> {
        loop {
            let state = self.step()?;
            if matches!(state, GameState::Finished | GameState::Cancelled) {
                return Ok(state);
            }
        }
    }
}
