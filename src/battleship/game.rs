use log::{debug, info};
use rand::rngs::SmallRng;

use crate::battleship::ai::TargetContext;
use crate::battleship::board::{Board, ShotResult};
use crate::battleship::placement::is_complete;
use crate::common::{BoardError, Coordinate, GameState, Move};
use crate::config::BattleshipConfig;
use crate::player::{Player, Setup};

/// One participant: its move source, its own board, and its picture of the
/// opponent's board.
pub struct Side {
    player: Box<dyn Player>,
    board: Board,
    view: Board,
    pending_hunt: Option<Coordinate>,
}

impl Side {
    fn new(player: Box<dyn Player>, config: &BattleshipConfig) -> Result<Self, BoardError> {
        Ok(Side {
            player,
            board: Board::new(config)?,
            view: Board::new(config)?,
            pending_hunt: None,
        })
    }

    /// This side's own fleet.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// What this side has learned about the opponent's board.
    pub fn view(&self) -> &Board {
        &self.view
    }

    /// Last hit that has not yet sunk its ship.
    pub fn pending_hunt(&self) -> Option<Coordinate> {
        self.pending_hunt
    }
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotRecord {
    pub shooter: usize,
    pub target: Coordinate,
    pub result: ShotResult,
}

/// Battleship game loop for two sides. Side 0 shoots first.
///
/// A side keeps shooting after a hit and hands the turn over on a miss.
pub struct BattleshipGame {
    config: BattleshipConfig,
    sides: [Side; 2],
    turn: usize,
    state: GameState,
    winner: Option<usize>,
    shots: Vec<ShotRecord>,
    rng: SmallRng,
}

impl BattleshipGame {
    pub fn new(
        config: BattleshipConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        rng: SmallRng,
    ) -> Result<Self, BoardError> {
        let sides = [Side::new(first, &config)?, Side::new(second, &config)?];
        Ok(Self {
            config,
            sides,
            turn: 0,
            state: GameState::Setup,
            winner: None,
            shots: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &BattleshipConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn side(&self, idx: usize) -> &Side {
        &self.sides[idx]
    }

    /// Index of the side about to shoot.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Index of the winning side once finished.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    /// Ask both sides to place their fleets. Moves to `InProgress` when both
    /// layouts are complete, `Cancelled` when a side quits.
    pub fn setup(&mut self) -> Result<GameState, BoardError> {
        if self.state != GameState::Setup {
            return Ok(self.state);
        }
        for (idx, side) in self.sides.iter_mut().enumerate() {
            match side
                .player
                .place_fleet(&mut self.rng, &mut side.board, &self.config.fleet)?
            {
                Setup::Quit => {
                    info!("side {} quit during placement", idx);
                    self.state = GameState::Cancelled;
                    return Ok(self.state);
                }
                Setup::Placed if !is_complete(&side.board, &self.config.fleet) => {
                    return Err(BoardError::InvariantViolation(
                        "placement finished with ships missing",
                    ));
                }
                Setup::Placed => debug!("side {} placed {} ships", idx, side.board.ships().len()),
            }
        }
        info!("battleship started");
        self.state = GameState::InProgress;
        Ok(self.state)
    }

    /// Fire a single shot for the side whose turn it is.
    pub fn step(&mut self) -> Result<GameState, BoardError> {
        match self.state {
            GameState::Setup => return self.setup(),
            GameState::Finished | GameState::Cancelled => return Ok(self.state),
            GameState::InProgress => {}
        }

        let turn = self.turn;
        let [first, second] = &mut self.sides;
        let (shooter, target) = if turn == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let ctx = TargetContext {
            view: &shooter.view,
            pending_hunt: shooter.pending_hunt(),
        };
        let coord = match shooter.player.select_target(&mut self.rng, &ctx)? {
            Move::Quit => {
                info!("side {} quit", turn);
                self.state = GameState::Cancelled;
                return Ok(self.state);
            }
            Move::Play(c) => c,
        };
        if !shooter.view.targets().contains(coord) {
            return Err(BoardError::InvariantViolation(
                "move source chose an unavailable target",
            ));
        }

        let result = target.board.shot(coord);
        debug!("side {} shot at {}: {:?}", turn, coord, result);
        match result {
            ShotResult::Destroyed(ship) => {
                target.board.mark_destroyed(&ship);
                shooter.view.mark_destroyed(&ship);
                target.board.remove_ship(&ship);
                shooter.view.record_known(ship);
                shooter.pending_hunt = None;
            }
            ShotResult::Damaged(_) => {
                target.board.mark_damaged(coord);
                shooter.view.mark_damaged(coord);
                shooter.pending_hunt = Some(coord);
            }
            ShotResult::Miss => {
                target.board.mark_miss(coord);
                shooter.view.mark_miss(coord);
                shooter.view.take_target(coord);
            }
        }
        shooter.player.handle_shot_result(coord, &result);
        target.player.handle_opponent_shot(coord, &result);
        let fleet_gone = target.board.ships().is_empty();

        self.shots.push(ShotRecord {
            shooter: turn,
            target: coord,
            result,
        });

        if fleet_gone {
            info!("side {} destroyed the whole fleet", turn);
            self.winner = Some(turn);
            self.state = GameState::Finished;
        } else if result == ShotResult::Miss {
            self.turn = 1 - turn;
        }
        Ok(self.state)
    }

    /// Place fleets if needed, then play until a fleet is gone or a side quits.
    pub fn run(&mut self) -> Result<GameState, BoardError> {
        loop {
            let state = self.step()?;
            if matches!(state, GameState::Finished | GameState::Cancelled) {
                return Ok(state);
            }
        }
    }
}
