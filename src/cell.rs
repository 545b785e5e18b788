use crate::config::{HIT, MISS, WATER};

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    occupied: bool,
    attacked: bool,
    symbol: char,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            occupied: false,
            attacked: false,
            symbol: WATER,
        }
    }
}

impl Cell {
    /// `true` iff a ship part lives here.
    pub fn occupied(&self) -> bool {
        self.occupied
    }

    /// `true` once the cell has been fired upon. Never reset.
    pub fn attacked(&self) -> bool {
        self.attacked
    }

    /// Display glyph: ship letter, `~`, `X` or `O`.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub(crate) fn occupy(&mut self, symbol: char) {
        self.occupied = true;
        self.symbol = symbol;
    }

    /// Mark the cell attacked and reveal it. Returns whether it held a ship.
    pub(crate) fn strike(&mut self) -> bool {
        self.attacked = true;
        self.symbol = if self.occupied { HIT } else { MISS };
        self.occupied
    }
}
