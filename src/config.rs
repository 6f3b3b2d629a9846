use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

/// Tic-tac-toe field size.
pub const FIELD_SIZE: usize = 3;
/// Default battleship board size.
pub const DEFAULT_BOARD_SIZE: usize = 6;
/// Largest battleship board whose cells fit in a `u128` available set.
pub const MAX_BOARD_SIZE: usize = 11;
pub const MAX_SHIP_LENGTH: usize = 4;
/// Full-layout restarts attempted by automatic placement before giving up.
pub const MAX_PLACEMENT_RESTARTS: usize = 1000;

/// Class name of a ship by its length.
pub fn ship_class(length: usize) -> &'static str {
    match length {
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Submarine",
        _ => "Ship",
    }
}

/// Errors raised while building or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall,
    BoardTooLarge(usize),
    EmptyFleet,
    InvalidShipLength(usize),
    MalformedFleet(String),
    FleetDoesNotFit { hit_points: usize, cells: usize },
    /// Ships plus the gap each one needs cannot be laid out without touching.
    FleetTooCrowded { footprint: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge(n) => {
                write!(f, "Board size {} exceeds the maximum of {}", n, MAX_BOARD_SIZE)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::InvalidShipLength(len) => write!(
                f,
                "Ship length {} must be between 1 and {} and fit on the board",
                len, MAX_SHIP_LENGTH
            ),
            ConfigError::MalformedFleet(s) => {
                write!(f, "Malformed fleet '{}', expected e.g. 3:1,2:2,1:4", s)
            }
            ConfigError::FleetDoesNotFit { hit_points, cells } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                hit_points, cells
            ),
            ConfigError::FleetTooCrowded {
                footprint,
                capacity,
            } => write!(
                f,
                "Fleet cannot be placed without ships touching (needs {} of {} spacing slots)",
                footprint, capacity
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Fleet composition: ship length mapped to the number of such ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    counts: BTreeMap<usize, usize>,
}

impl Fleet {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut counts = BTreeMap::new();
        for (len, count) in entries {
            if count > 0 {
                *counts.entry(len).or_insert(0) += count;
            }
        }
        Self { counts }
    }

    /// Number of ships a completed layout holds.
    pub fn ship_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// Area the fleet covers on a board grown by one row and column, each
    /// ship counted as a `(length + 1)`×2 block. Ships that do not touch
    /// never share a block cell.
    pub fn footprint(&self) -> usize {
        self.counts
            .iter()
            .map(|(len, count)| 2 * (len + 1) * count)
            .sum()
    }

    /// Sum of all ship lengths.
    pub fn hit_points(&self) -> usize {
        self.counts.iter().map(|(len, count)| len * count).sum()
    }

    /// `(length, count)` pairs, longest ships first.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().rev().map(|(&len, &count)| (len, count))
    }

    /// Every ship length in placement order, longest first.
    pub fn ships(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries()
            .flat_map(|(len, count)| core::iter::repeat(len).take(count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::new([(3, 1), (2, 2), (1, 4)])
    }
}

impl FromStr for Fleet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedFleet(s.to_string());
        let mut entries = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (len, count) = part.split_once(':').ok_or_else(malformed)?;
            let len: usize = len.trim().parse().map_err(|_| malformed())?;
            let count: usize = count.trim().parse().map_err(|_| malformed())?;
            entries.push((len, count));
        }
        Ok(Fleet::new(entries))
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (len, count) in self.entries() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", len, count)?;
            first = false;
        }
        Ok(())
    }
}

/// Immutable battleship configuration threaded through boards and the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleshipConfig {
    pub board_size: usize,
    pub fleet: Fleet,
}

impl BattleshipConfig {
    pub fn new(board_size: usize, fleet: Fleet) -> Result<Self, ConfigError> {
        let config = Self { board_size, fleet };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::BoardTooSmall);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (len, _) in self.fleet.entries() {
            if len == 0 || len > MAX_SHIP_LENGTH || len > self.board_size {
                return Err(ConfigError::InvalidShipLength(len));
            }
        }
        let cells = self.board_size * self.board_size;
        let hit_points = self.fleet.hit_points();
        if hit_points > cells {
            return Err(ConfigError::FleetDoesNotFit { hit_points, cells });
        }
        let footprint = self.fleet.footprint();
        let capacity = (self.board_size + 1) * (self.board_size + 1);
        if footprint > capacity {
            return Err(ConfigError::FleetTooCrowded {
                footprint,
                capacity,
            });
        }
        Ok(())
    }
}

impl Default for BattleshipConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: Fleet::default(),
        }
    }
}
