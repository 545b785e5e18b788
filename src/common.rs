//! Common types for the game: board errors and attack results.

use serde::Serialize;
use thiserror::Error;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttackResult {
    /// Coordinate lies outside the grid. Nothing was changed.
    OutOfBounds,
    /// Cell was fired upon earlier. Nothing was changed.
    AlreadyAttacked,
    /// Cell held part of a ship.
    Hit,
    /// Cell was open water.
    Miss,
}

impl AttackResult {
    /// `true` for `Hit` and `Miss`, the outcomes that consume a turn.
    pub fn is_valid(self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Miss)
    }
}

/// Errors returned by board, ship and targeting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board size outside `1..=max`.
    #[error("board size {size} is invalid, must be between 1 and {max}")]
    InvalidBoardSize { size: usize, max: usize },
    /// Ship is empty or longer than the board.
    #[error("ship '{symbol}' of length {length} does not fit on a {board_size}x{board_size} board")]
    InvalidShipSpec {
        symbol: char,
        length: usize,
        board_size: usize,
    },
    /// Ship has no position yet.
    #[error("ship '{0}' has not been positioned")]
    ShipNotPositioned(char),
    /// Ship footprint leaves the grid.
    #[error("ship '{0}' placement is out of bounds")]
    ShipOutOfBounds(char),
    /// Ship footprint covers an occupied cell.
    #[error("ship '{0}' placement overlaps with another ship")]
    ShipOverlaps(char),
    /// No free run of cells is long enough for the ship.
    #[error("no free position left for ship '{symbol}' of length {length}")]
    NoValidPlacement { symbol: char, length: usize },
    /// The fleets of a game have already been placed.
    #[error("fleets have already been placed")]
    FleetAlreadyPlaced,
    /// Every cell has already been attacked.
    #[error("every cell on the board has already been attacked")]
    BoardExhausted,
}
