//! Per-cell winning potential used for fork selection.
//!
//! A cell's rank for a mark counts the lines through it (its row, its column
//! and whichever diagonals it lies on) that hold no opposing mark. The higher
//! the rank, the more ways a mark placed there can still complete a line.

use std::collections::BTreeMap;

use crate::common::Coordinate;
use crate::config::FIELD_SIZE;
use crate::tictactoe::field::{GridField, Mark};

/// Rank of one empty cell for each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rank {
    pub x: u8,
    pub o: u8,
}

impl Rank {
    pub fn for_mark(&self, mark: Mark) -> u8 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Lines through `c`: row, column, and the diagonals it sits on.
fn lines_through(c: Coordinate) -> impl Iterator<Item = [Coordinate; FIELD_SIZE]> {
    GridField::lines().filter(move |line| line.contains(&c))
}

fn open_for(field: &GridField, line: &[Coordinate; FIELD_SIZE], mark: Mark) -> bool {
    line.iter().all(|&c| field.get(c) != Some(mark.opponent()))
}

/// Ranks of every empty cell of `field`.
pub fn ranks(field: &GridField) -> BTreeMap<Coordinate, Rank> {
    field
        .empty_cells()
        .map(|cell| {
            let mut rank = Rank::default();
            for line in lines_through(cell) {
                rank.x += open_for(field, &line, Mark::X) as u8;
                rank.o += open_for(field, &line, Mark::O) as u8;
            }
            (cell, rank)
        })
        .collect()
}
