//! Ship definitions and random placement proposals.

use core::fmt;

use rand::Rng;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends along the row, towards higher columns.
    Horizontal,
    /// Extends along the column, towards higher rows.
    Vertical,
}

/// Origin and orientation of a positioned ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// The `length` consecutive cells starting at the origin.
    pub fn cells(self, length: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Whether a ship of `length` starting here stays inside a `board_size` grid.
    pub fn fits(self, length: usize, board_size: usize) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (self.col, self.row),
            Orientation::Vertical => (self.row, self.col),
        };
        across < board_size && along + length <= board_size
    }
}

/// A straight ship identified by its display symbol.
///
/// A ship starts out unpositioned. [`Ship::propose_position`] draws a random
/// position that fits the board but ignores other ships; the
/// [`Board`](crate::Board) decides whether to accept it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    symbol: char,
    length: usize,
    placement: Option<Placement>,
}

impl Ship {
    /// Create an unpositioned ship.
    pub const fn new(symbol: char, length: usize) -> Self {
        Self {
            symbol,
            length,
            placement: None,
        }
    }

    /// Builder that positions the ship at (`row`, `col`) with `orientation`.
    pub fn at(mut self, row: usize, col: usize, orientation: Orientation) -> Self {
        self.placement = Some(Placement::new(row, col, orientation));
        self
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Current position, if one has been assigned.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Cells covered by the ship, or `None` while it is unpositioned.
    pub fn cells(&self) -> Option<impl Iterator<Item = (usize, usize)>> {
        let length = self.length;
        self.placement.map(move |p| p.cells(length))
    }

    /// Fail unless the ship can lie somewhere on a `board_size` grid.
    pub fn check_fits(&self, board_size: usize) -> Result<(), BoardError> {
        if self.length == 0 || self.length > board_size {
            return Err(BoardError::InvalidShipSpec {
                symbol: self.symbol,
                length: self.length,
                board_size,
            });
        }
        Ok(())
    }

    /// Draw a uniformly random position that fits inside a `board_size` grid
    /// and store it on the ship.
    pub fn propose_position<R: Rng + ?Sized>(
        &mut self,
        board_size: usize,
        rng: &mut R,
    ) -> Result<Placement, BoardError> {
        self.check_fits(board_size)?;
        let orientation = if rng.random_bool(0.5) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let last_origin = board_size - self.length;
        let (row, col) = match orientation {
            Orientation::Vertical => (
                rng.random_range(0..=last_origin),
                rng.random_range(0..board_size),
            ),
            Orientation::Horizontal => (
                rng.random_range(0..board_size),
                rng.random_range(0..=last_origin),
            ),
        };
        let placement = Placement::new(row, col, orientation);
        self.placement = Some(placement);
        Ok(placement)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placement {
            Some(p) => write!(
                f,
                "Ship {{ symbol: '{}', length: {}, origin: ({}, {}), orientation: {:?} }}",
                self.symbol, self.length, p.row, p.col, p.orientation
            ),
            None => write!(
                f,
                "Ship {{ symbol: '{}', length: {}, unplaced }}",
                self.symbol, self.length
            ),
        }
    }
}
