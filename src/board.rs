//! Game board: a square grid of cells with ships stamped into it.

use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::cell::Cell;
use crate::common::{AttackResult, BoardError};
use crate::config::{MAX_BOARD_SIZE, WATER};
use crate::coord::row_label;
use crate::ship::{Orientation, Placement, Ship};

/// Random proposals allowed per free cell before falling back to a scan.
const PLACEMENT_ATTEMPTS_PER_FREE_CELL: usize = 4;

/// One side's grid.
///
/// Ships are not retained once placed: only their symbols and occupancy are
/// stamped into the cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board of open water.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidBoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Board {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Cell at (`row`, `col`), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of cells without a ship.
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.occupied()).count()
    }

    /// Number of ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.occupied() && !c.attacked())
            .count()
    }

    /// Coordinates that have not been fired upon, in row-major order.
    pub fn unattacked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.attacked())
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Returns `true` if the ship is positioned, inside the grid, and every
    /// cell it would cover is unoccupied.
    pub fn can_place(&self, ship: &Ship) -> bool {
        match ship.placement() {
            Some(p) => self.is_free(p, ship.length()),
            None => false,
        }
    }

    fn is_free(&self, placement: Placement, length: usize) -> bool {
        placement.fits(length, self.size)
            && placement
                .cells(length)
                .all(|(r, c)| self.cell(r, c).is_some_and(|cell| !cell.occupied()))
    }

    /// Stamp an already positioned ship onto the board.
    pub fn place(&mut self, ship: &Ship) -> Result<(), BoardError> {
        let placement = ship
            .placement()
            .ok_or(BoardError::ShipNotPositioned(ship.symbol()))?;
        if !placement.fits(ship.length(), self.size) {
            return Err(BoardError::ShipOutOfBounds(ship.symbol()));
        }
        if !self.is_free(placement, ship.length()) {
            return Err(BoardError::ShipOverlaps(ship.symbol()));
        }
        self.stamp(ship.symbol(), placement, ship.length());
        Ok(())
    }

    fn stamp(&mut self, symbol: char, placement: Placement, length: usize) {
        for (r, c) in placement.cells(length) {
            let i = r * self.size + c;
            self.cells[i].occupy(symbol);
        }
        debug!(
            "placed '{}' (length {}) at ({}, {}) {:?}",
            symbol, length, placement.row, placement.col, placement.orientation
        );
    }

    /// Place every ship in order at random, non-overlapping positions.
    ///
    /// Each ship is proposed at random a bounded number of times; if none of
    /// the proposals is free the first free position in row-major order is
    /// taken instead. Ships are checked against the board size before any is
    /// placed. On error neither the board nor the ships are changed.
    pub fn place_all<R: Rng + ?Sized>(
        &mut self,
        ships: &mut [Ship],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        for ship in ships.iter() {
            ship.check_fits(self.size)?;
        }
        let mut scratch = self.clone();
        let mut placed = ships.to_vec();
        for ship in placed.iter_mut() {
            scratch.place_random(ship, rng)?;
        }
        *self = scratch;
        ships.copy_from_slice(&placed);
        Ok(())
    }

    fn place_random<R: Rng + ?Sized>(
        &mut self,
        ship: &mut Ship,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let attempts = (self.free_cells() * PLACEMENT_ATTEMPTS_PER_FREE_CELL).max(1);
        for attempt in 0..attempts {
            let placement = ship.propose_position(self.size, rng)?;
            if self.can_place(ship) {
                trace!("'{}' accepted after {} proposals", ship.symbol(), attempt + 1);
                self.stamp(ship.symbol(), placement, ship.length());
                return Ok(());
            }
        }
        debug!(
            "'{}' found no free spot in {} proposals, scanning",
            ship.symbol(),
            attempts
        );
        let placement = self
            .first_free_placement(ship.length())
            .ok_or(BoardError::NoValidPlacement {
                symbol: ship.symbol(),
                length: ship.length(),
            })?;
        ship.set_placement(placement);
        self.stamp(ship.symbol(), placement, ship.length());
        Ok(())
    }

    /// First free position for a ship of `length`, scanning row-major and
    /// trying horizontal before vertical at each origin.
    pub fn first_free_placement(&self, length: usize) -> Option<Placement> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .flat_map(|(r, c)| {
                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .map(move |o| Placement::new(r, c, o))
            })
            .find(|&p| self.is_free(p, length))
    }

    /// Fire at (`row`, `col`).
    ///
    /// Coordinates that do not convert to an in-range index (including
    /// negative ones) are reported as [`AttackResult::OutOfBounds`]. Only the
    /// targeted cell is ever modified.
    pub fn attack<T: TryInto<usize>>(&mut self, row: T, col: T) -> AttackResult {
        let (Ok(row), Ok(col)) = (row.try_into(), col.try_into()) else {
            return AttackResult::OutOfBounds;
        };
        let Some(i) = self.index(row, col) else {
            return AttackResult::OutOfBounds;
        };
        let cell = &mut self.cells[i];
        if cell.attacked() {
            return AttackResult::AlreadyAttacked;
        }
        if cell.strike() {
            AttackResult::Hit
        } else {
            AttackResult::Miss
        }
    }

    /// Returns `true` when every ship cell has been hit. An empty board counts
    /// as sunk.
    pub fn all_sunk(&self) -> bool {
        self.cells.iter().all(|c| !c.occupied() || c.attacked())
    }

    /// Rendering that hides cells not yet fired upon.
    pub fn fog_view(&self) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal: false,
        }
    }

    /// Rendering that shows every ship.
    pub fn full_view(&self) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal: true,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {} }}", self.size)?;
        fmt::Display::fmt(&self.full_view(), f)
    }
}

/// Text rendering of a board with column numbers and row letters.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl BoardView<'_> {
    fn glyph(&self, cell: &Cell) -> char {
        if self.reveal || cell.attacked() {
            cell.symbol()
        } else {
            WATER
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 1..=self.board.size {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;
        for (r, row) in self.board.rows().enumerate() {
            write!(f, "{} ", row_label(r))?;
            for (c, cell) in row.iter().enumerate() {
                // two-digit column headers take an extra character
                let pad = if c < 9 { " " } else { "  " };
                write!(f, "{}{}", self.glyph(cell), pad)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
