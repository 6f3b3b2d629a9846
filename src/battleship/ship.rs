//! Straight ships anchored at a coordinate.

use core::fmt;

use crate::common::{BoardError, Coordinate};
use crate::config::{ship_class, MAX_SHIP_LENGTH};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the row, towards higher columns.
    Horizontal,
    /// Extends down the column, towards higher rows.
    Vertical,
}

impl Orientation {
    /// Step between consecutive ship cells.
    pub fn unit(self) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(0, 1),
            Orientation::Vertical => Coordinate::new(1, 0),
        }
    }
}

/// A ship of `length` cells starting at `anchor`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
    hit_points: usize,
}

impl Ship {
    /// Build an undamaged ship. Bounds are the board's business.
    pub fn new(length: usize, anchor: Coordinate, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidShipLength(length));
        }
        Ok(Ship {
            length,
            anchor,
            orientation,
            hit_points: length,
        })
    }

    /// Single-cell stand-in used to draw the partial contour around a hit.
    pub fn single(at: Coordinate) -> Self {
        Ship {
            length: 1,
            anchor: at,
            orientation: Orientation::Horizontal,
            hit_points: 1,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn class(&self) -> &'static str {
        ship_class(self.length)
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Ship {
            anchor,
            orientation,
            length,
            ..
        } = *self;
        let step = orientation.unit();
        (0..length as i32).map(move |i| anchor + Coordinate::new(step.row * i, step.col * i))
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.cells().any(|cell| cell == c)
    }

    /// Take one hit. Returns the remaining hit points, never below zero.
    pub fn register_hit(&mut self) -> usize {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ class: \"{}\", anchor: {}, orientation: {:?}, hit_points: {}/{} }}",
            self.class(),
            self.anchor,
            self.orientation,
            self.hit_points,
            self.length,
        )
    }
}
