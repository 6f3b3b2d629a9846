//! Common types shared by both games: coordinates, moves, lifecycle states
//! and the error enums.

use core::fmt;
use core::ops::Add;

use crate::cellset::CellSetError;

/// A position on a square grid as `(row, col)`.
///
/// Coordinates carry no bounds of their own; whether one is valid depends on
/// the board it is used with. Arithmetic is signed so that neighbours of edge
/// cells can be computed and then rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns `(row, col)` as indices when the coordinate lies on an
    /// `size`×`size` grid.
    pub fn index(self, size: usize) -> Option<(usize, usize)> {
        let n = size as i32;
        if self.row < 0 || self.col < 0 || self.row >= n || self.col >= n {
            None
        } else {
            Some((self.row as usize, self.col as usize))
        }
    }

    /// The eight cells at Chebyshev distance one, plus the cell itself when
    /// `include_self` is set.
    pub fn surrounding(self, include_self: bool) -> impl Iterator<Item = (i32, i32, Coordinate)> {
        (-1..=1).flat_map(move |dr| {
            (-1..=1).filter_map(move |dc| {
                if !include_self && dr == 0 && dc == 0 {
                    None
                } else {
                    Some((dr, dc, self + Coordinate::new(dr, dc)))
                }
            })
        })
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Rows are shown as letters, columns as 1-based numbers (`B2`).
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.row) {
            write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// What a move source hands back to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Play(Coordinate),
    Quit,
}

/// Lifecycle shared by both game loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Setup,
    InProgress,
    Finished,
    Cancelled,
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell-set error (board too large for the backing integer).
    CellSet(CellSetError),
    /// No coordinates remain eligible for placement.
    OutOfSpace,
    /// A ship cell is not in the available set (occupied, touching or off the board).
    BoardConflict(Coordinate),
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// Ship length outside the supported range.
    InvalidShipLength(usize),
    /// Internal bookkeeping went wrong; not recoverable.
    InvariantViolation(&'static str),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::CellSet(e) => write!(f, "Cell set error: {}", e),
            BoardError::OutOfSpace => write!(f, "No free spots left on the board"),
            BoardError::BoardConflict(c) => {
                write!(f, "Position {} is busy or out of the board", c)
            }
            BoardError::OutOfBounds(c) => write!(f, "Coordinate {} is out of the board", c),
            BoardError::InvalidShipLength(len) => write!(f, "Unsupported ship length {}", len),
            BoardError::InvariantViolation(what) => write!(f, "Invariant violated: {}", what),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        BoardError::CellSet(err)
    }
}

/// Recoverable input failures reported by the console adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Malformed(String),
    Unavailable(Coordinate),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(msg) => write!(f, "{}", msg),
            InputError::Unavailable(c) => write!(f, "{} is not available, try again", c),
        }
    }
}

impl std::error::Error for InputError {}
