use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::battleship::{place_random_ship, random_layout, Board, Orientation, Ship, ShotResult, TargetContext};
use crate::common::{BoardError, Coordinate, InputError, Move};
use crate::config::{ship_class, Fleet, FIELD_SIZE};
use crate::tictactoe::{GridField, Mark};
use crate::ui::{describe_shot, render_board, render_field};

use super::{MarkPlayer, Player, Setup};

/// Token that quits the current game from any prompt.
pub const QUIT: &str = ":q";

/// Parse a coordinate such as `B2`, `b 2` or `2 2` on a `size`×`size` grid.
///
/// The row is a letter (`A` is the first row) or a 1-based number, the column
/// a 1-based number.
pub fn parse_coord(input: &str, size: usize) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (row_str, col_str) = match tokens.as_slice() {
        [] => return Err(InputError::Malformed("Empty input".to_string())),
        [single] => {
            let mut chars = single.chars();
            let first = chars.next().ok_or_else(|| InputError::Malformed("Empty input".to_string()))?;
            let rest = chars.as_str();
            if rest.is_empty() {
                return Err(InputError::Malformed(
                    "Too short - need a row and a column (e.g., B2)".to_string(),
                ));
            }
            (&single[..first.len_utf8()], rest)
        }
        [row, col, ..] => (*row, *col),
    };

    let row = if let Ok(n) = row_str.parse::<usize>() {
        if n == 0 || n > size {
            return Err(InputError::Malformed(format!(
                "Row {} out of bounds - must be 1-{}",
                n, size
            )));
        }
        n - 1
    } else {
        let mut chars = row_str.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => ch.to_ascii_uppercase(),
            _ => {
                return Err(InputError::Malformed(format!(
                    "Invalid row '{}' - must be a letter or a number",
                    row_str
                )))
            }
        };
        let idx = (ch as u8 - b'A') as usize;
        if idx >= size {
            return Err(InputError::Malformed(format!(
                "Row '{}' out of bounds - must be A-{}",
                ch,
                (b'A' + size as u8 - 1) as char
            )));
        }
        idx
    };

    let col: usize = col_str.parse().map_err(|_| {
        InputError::Malformed(format!("Invalid column '{}' - must be a number", col_str))
    })?;
    if col == 0 || col > size {
        return Err(InputError::Malformed(format!(
            "Column {} out of bounds - must be 1-{}",
            col, size
        )));
    }
    Ok(Coordinate::new(row as i32, (col - 1) as i32))
}

/// Parse a ship placement: a coordinate, horizontal when followed by `-`.
pub fn parse_placement(input: &str, size: usize) -> Result<(Coordinate, Orientation), InputError> {
    let input = input.trim();
    match input.strip_suffix('-') {
        Some(rest) => Ok((parse_coord(rest, size)?, Orientation::Horizontal)),
        None => Ok((parse_coord(input, size)?, Orientation::Vertical)),
    }
}

/// Interactive console player.
pub struct CliPlayer<R, W> {
    input: R,
    out: W,
    auto_place: bool,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        CliPlayer::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            auto_place: false,
        }
    }

    /// Let the fleet be placed at random instead of asking for every ship.
    pub fn with_auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    fn say(&mut self, msg: impl Display) {
        let _ = writeln!(self.out, "{}", msg);
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.out, "{} ", prompt);
        let _ = self.out.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!("failed to read input: {}", e);
                None
            }
        }
    }

    fn manual_layout(&mut self, rng: &mut SmallRng, board: &mut Board, fleet: &Fleet) -> Result<Setup, BoardError> {
        'layout: loop {
            board.reset()?;
            self.say("Enter a letter for the row and a number for the column.");
            self.say("Add a dash '-' at the end to place the ship horizontally (e.g. B2-).");
            self.say("Press ENTER to place the current ship at random, :q to quit.");
            let rendered = render_board(board);
            self.say(rendered);

            for (length, count) in fleet.entries() {
                for n in 1..=count {
                    let prompt = format!("{}-deck ship #{} ({}):", length, n, ship_class(length));
                    loop {
                        let line = match self.ask(&prompt) {
                            None => return Ok(Setup::Quit),
                            Some(line) => line,
                        };
                        if line.eq_ignore_ascii_case(QUIT) {
                            return Ok(Setup::Quit);
                        }
                        let placed = if line.is_empty() {
                            place_random_ship(rng, board, length).map(|_| ())
                        } else {
                            let (anchor, orientation) = match parse_placement(&line, board.size()) {
                                Ok(p) => p,
                                Err(e) => {
                                    self.say(format!("✗ {}", e));
                                    continue;
                                }
                            };
                            board.add_ship(Ship::new(length, anchor, orientation)?)
                        };
                        match placed {
                            Ok(()) => {
                                let rendered = render_board(board);
                                self.say(rendered);
                                break;
                            }
                            Err(BoardError::BoardConflict(c)) => {
                                self.say(format!(
                                    "✗ {} is busy or out of the board. Try to rotate the ship.",
                                    c
                                ));
                            }
                            Err(BoardError::OutOfSpace) => {
                                self.say("No free spots left for this ship! Starting over.");
                                continue 'layout;
                            }
                            Err(e) => return Err(e),
                        }
                    }
                }
            }
            return Ok(Setup::Placed);
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<Setup, BoardError> {
        if self.auto_place {
            random_layout(rng, board, fleet)?;
            self.say("Your fleet has been placed:");
            let rendered = render_board(board);
            self.say(rendered);
            return Ok(Setup::Placed);
        }
        self.manual_layout(rng, board, fleet)
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        ctx: &TargetContext<'_>,
    ) -> Result<Move, BoardError> {
        loop {
            let line = match self.ask("Your turn [row col] (:q to quit):") {
                None => return Ok(Move::Quit),
                Some(line) => line,
            };
            if line.eq_ignore_ascii_case(QUIT) {
                return Ok(Move::Quit);
            }
            match parse_coord(&line, ctx.view.size()) {
                Ok(c) if ctx.view.targets().contains(c) => return Ok(Move::Play(c)),
                Ok(c) => self.say(format!("✗ {}", InputError::Unavailable(c))),
                Err(e) => self.say(format!("✗ {}", e)),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: &ShotResult) {
        let msg = describe_shot("You", target, result);
        self.say(msg);
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, result: &ShotResult) {
        let msg = describe_shot("AI", target, result);
        self.say(msg);
    }
}

impl<R: BufRead, W: Write> MarkPlayer for CliPlayer<R, W> {
    fn select_cell(
        &mut self,
        _rng: &mut SmallRng,
        field: &GridField,
        me: Mark,
    ) -> Result<Move, BoardError> {
        let prompt = format!("Your turn as {} [:q to exit]:", me);
        loop {
            let line = match self.ask(&prompt) {
                None => return Ok(Move::Quit),
                Some(line) => line,
            };
            if line.eq_ignore_ascii_case(QUIT) {
                return Ok(Move::Quit);
            }
            match parse_coord(&line, FIELD_SIZE) {
                Ok(c) if field.is_empty_cell(c) => return Ok(Move::Play(c)),
                Ok(c) => self.say(format!("✗ {}", InputError::Unavailable(c))),
                Err(e) => self.say(format!("✗ {}", e)),
            }
        }
    }

    fn handle_move(&mut self, mark: Mark, cell: Coordinate, field: &GridField) {
        self.say(format!("{} plays {}", mark, cell));
        let rendered = render_field(field);
        self.say(rendered);
    }
}
