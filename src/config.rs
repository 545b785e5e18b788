//! Board size and fleet roster.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::ship::Ship;

/// Board size used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Rows are labelled `A..=Z`, which caps the board size.
pub const MAX_BOARD_SIZE: usize = 26;

/// Symbols the board uses for its own markings.
pub const WATER: char = '~';
pub const HIT: char = 'X';
pub const MISS: char = 'O';
pub const RESERVED_SYMBOLS: [char; 3] = [WATER, HIT, MISS];

/// Errors raised while parsing or validating a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is invalid, must be between 1 and {max}")]
    InvalidBoardSize { size: usize, max: usize },
    #[error("fleet is empty")]
    EmptyFleet,
    #[error("ship '{symbol}' of length {length} does not fit on a {board_size}x{board_size} board")]
    InvalidShipSpec {
        symbol: char,
        length: usize,
        board_size: usize,
    },
    #[error("ship symbol '{0}' is reserved or not a letter")]
    InvalidSymbol(char),
    #[error("fleet needs {cells} cells but the board only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    #[error("cannot parse ship spec '{0}', expected a letter followed by a length (e.g. S3)")]
    Malformed(String),
}

/// Symbol and length of one ship in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    symbol: char,
    length: usize,
}

impl ShipSpec {
    pub const fn new(symbol: char, length: usize) -> Self {
        Self { symbol, length }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Build an unplaced ship from this spec.
    pub fn build(&self) -> Ship {
        Ship::new(self.symbol, self.length)
    }
}

impl fmt::Display for ShipSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, self.length)
    }
}

impl FromStr for ShipSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| ConfigError::Malformed(s.to_string()))?
            .to_ascii_uppercase();
        let length = chars
            .as_str()
            .parse()
            .map_err(|_| ConfigError::Malformed(s.to_string()))?;
        Ok(ShipSpec::new(symbol, length))
    }
}

/// Standard four-ship fleet.
pub const DEFAULT_FLEET: [ShipSpec; 4] = [
    ShipSpec::new('S', 3),
    ShipSpec::new('L', 1),
    ShipSpec::new('L', 1),
    ShipSpec::new('L', 1),
];

/// Longer eight-ship roster.
pub const FULL_FLEET: [ShipSpec; 8] = [
    ShipSpec::new('P', 5),
    ShipSpec::new('B', 4),
    ShipSpec::new('B', 4),
    ShipSpec::new('S', 3),
    ShipSpec::new('S', 3),
    ShipSpec::new('L', 1),
    ShipSpec::new('L', 1),
    ShipSpec::new('L', 1),
];

/// Parse a comma separated roster such as `"P5,B4,S3"`.
pub fn parse_fleet(input: &str) -> Result<Vec<ShipSpec>, ConfigError> {
    input
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Board size and fleet shared by both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<ShipSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, fleet: Vec<ShipSpec>) -> Self {
        Self { board_size, fleet }
    }

    /// Default board with [`FULL_FLEET`].
    pub fn full_fleet() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: FULL_FLEET.to_vec(),
        }
    }

    /// Total number of cells the fleet covers.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(ShipSpec::length).sum()
    }

    /// Check the configuration before any board is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for spec in &self.fleet {
            if !spec.symbol.is_ascii_alphabetic() || RESERVED_SYMBOLS.contains(&spec.symbol) {
                return Err(ConfigError::InvalidSymbol(spec.symbol));
            }
            if spec.length == 0 || spec.length > self.board_size {
                return Err(ConfigError::InvalidShipSpec {
                    symbol: spec.symbol,
                    length: spec.length,
                    board_size: self.board_size,
                });
            }
        }
        let capacity = self.board_size * self.board_size;
        let cells = self.fleet_cells();
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }

    /// Fresh, unplaced ships for one side.
    pub fn ships(&self) -> Vec<Ship> {
        self.fleet.iter().map(ShipSpec::build).collect()
    }
}
