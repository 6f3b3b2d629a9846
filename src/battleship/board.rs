//! Battleship board: cell states, placed fleet and the available sets.
//!
//! A board keeps two independently shrinking sets. The placement set holds
//! cells where a new ship may still go; it loses a ship's cells and their
//! whole contour on every `add_ship`. The target set holds cells still worth
//! shooting at; on the board a shooter keeps of its opponent it loses missed
//! cells and the contours drawn after hits.

use log::debug;

use crate::battleship::ship::Ship;
use crate::cellset::CellSet;
use crate::common::{BoardError, Coordinate};
use crate::config::BattleshipConfig;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Contour,
    Damaged,
    Destroyed,
    Miss,
}

/// Outcome of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    /// The ship survived; carries its state after the hit.
    Damaged(Ship),
    /// The shot took the ship's last hit point.
    Destroyed(Ship),
}

pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    placement: CellSet,
    targets: CellSet,
    ships: Vec<Ship>,
    known_ships: Vec<Ship>,
    hit_point_budget: usize,
}

impl Board {
    /// Create an empty board for `config`.
    pub fn new(config: &BattleshipConfig) -> Result<Self, BoardError> {
        let size = config.board_size;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            placement: CellSet::full(size)?,
            targets: CellSet::full(size)?,
            ships: Vec::new(),
            known_ships: Vec::new(),
            hit_point_budget: config.fleet.hit_points(),
        })
    }

    /// Clear every cell, ship and set back to the freshly created state.
    pub fn reset(&mut self) -> Result<(), BoardError> {
        self.cells.iter_mut().for_each(|c| *c = Cell::Empty);
        self.placement = CellSet::full(self.size)?;
        self.targets = CellSet::full(self.size)?;
        self.ships.clear();
        self.known_ships.clear();
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the cell at `c`, `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        c.index(self.size).map(|(r, col)| self.cells[r * self.size + col])
    }

    fn set_cell(&mut self, c: Coordinate, state: Cell) {
        if let Some((r, col)) = c.index(self.size) {
            self.cells[r * self.size + col] = state;
        }
    }

    /// Ships still afloat on this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Enemy ships this board's owner has destroyed.
    pub fn known_ships(&self) -> &[Ship] {
        &self.known_ships
    }

    /// Cells still eligible for ship placement.
    pub fn placement_set(&self) -> &CellSet {
        &self.placement
    }

    /// Cells still eligible as shot targets.
    pub fn targets(&self) -> &CellSet {
        &self.targets
    }

    /// Sum of the hit points of the configured fleet.
    pub fn hit_point_budget(&self) -> usize {
        self.hit_point_budget
    }

    /// Hit points left across the ships still afloat.
    pub fn remaining_hit_points(&self) -> usize {
        self.ships.iter().map(Ship::hit_points).sum()
    }

    /// Place `ship` if all of its cells are available, then block its contour.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.placement.is_empty() {
            return Err(BoardError::OutOfSpace);
        }
        if let Some(conflict) = ship.cells().find(|&c| !self.placement.contains(c)) {
            return Err(BoardError::BoardConflict(conflict));
        }
        for c in ship.cells() {
            self.placement.remove(c);
            self.set_cell(c, Cell::Ship);
        }
        self.ships.push(ship);
        for c in contour_cells(&ship, true) {
            if self.placement.remove(c) {
                self.mark_contour(c);
            }
        }
        debug!("placed {:?}", ship);
        Ok(())
    }

    /// Remove the cells around `ship` from the target set and mark the ones
    /// still empty as contour.
    ///
    /// With `full` all eight neighbours of every ship cell (and the cells
    /// themselves) are taken. Without it the four orthogonal neighbours are
    /// left alone so the hunt can continue along the ship.
    pub fn apply_contour(&mut self, ship: &Ship, full: bool) {
        for c in contour_cells(ship, full) {
            if self.targets.remove(c) {
                self.mark_contour(c);
            }
        }
    }

    fn mark_contour(&mut self, c: Coordinate) {
        if self.cell(c) == Some(Cell::Empty) {
            self.set_cell(c, Cell::Contour);
        }
    }

    /// Index of the ship covering `c`.
    pub fn find_ship(&self, c: Coordinate) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(c))
    }

    /// Resolve a shot at `c` against the placed fleet.
    pub fn shot(&mut self, c: Coordinate) -> ShotResult {
        match self.find_ship(c) {
            None => ShotResult::Miss,
            Some(idx) => {
                let ship = &mut self.ships[idx];
                ship.register_hit();
                if ship.is_sunk() {
                    ShotResult::Destroyed(*ship)
                } else {
                    ShotResult::Damaged(*ship)
                }
            }
        }
    }

    /// Record a missed shot at `c`.
    pub fn mark_miss(&mut self, c: Coordinate) {
        self.set_cell(c, Cell::Miss);
    }

    /// Drop `c` from the target set. Returns whether it was still there.
    pub fn take_target(&mut self, c: Coordinate) -> bool {
        self.targets.remove(c)
    }

    /// Record a non-destroying hit at `c` and block its diagonals.
    pub fn mark_damaged(&mut self, c: Coordinate) {
        self.set_cell(c, Cell::Damaged);
        self.apply_contour(&Ship::single(c), false);
    }

    /// Record a destroyed ship and block its full contour.
    pub fn mark_destroyed(&mut self, ship: &Ship) {
        for c in ship.cells() {
            self.set_cell(c, Cell::Destroyed);
        }
        self.apply_contour(ship, true);
    }

    /// Take a ship off the fleet list, matching by position and length.
    pub fn remove_ship(&mut self, ship: &Ship) -> Option<Ship> {
        let idx = self.ships.iter().position(|s| {
            s.anchor() == ship.anchor()
                && s.orientation() == ship.orientation()
                && s.length() == ship.length()
        })?;
        Some(self.ships.remove(idx))
    }

    /// Remember an enemy ship destroyed by this board's owner.
    pub fn record_known(&mut self, ship: Ship) {
        self.known_ships.push(ship);
    }
}

/// Cells in the contour of `ship`, the ship's own cells included.
///
/// A partial contour skips the four orthogonal neighbours of each cell.
pub fn contour_cells(ship: &Ship, full: bool) -> Vec<Coordinate> {
    let mut out: Vec<Coordinate> = Vec::new();
    for cell in ship.cells() {
        for (dr, dc, c) in cell.surrounding(true) {
            if full || (dr + dc).abs() != 1 {
                if !out.contains(&c) {
                    out.push(c);
                }
            }
        }
    }
    out
}
