#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub land_mines: CellCount,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord, land_mines: CellCount) -> Self {
        Self {
            rows,
            cols,
            land_mines,
        }
    }

    /// A board needs at least one cell, at least one land mine, and at least one safe cell.
    pub fn new(rows: Coord, cols: Coord, land_mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, land_mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.land_mines == 0 {
            return Err(GameError::NoLandMines);
        }
        if self.land_mines >= self.total_cells() {
            return Err(GameError::TooManyLandMines);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// Preset board configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLevel {
    VeryBeginner,
    Beginner,
    Middle,
    Advanced,
}

impl GameLevel {
    pub const fn config(self) -> BoardConfig {
        use GameLevel::*;
        match self {
            VeryBeginner => BoardConfig::new_unchecked(4, 5, 2),
            Beginner => BoardConfig::new_unchecked(8, 10, 10),
            Middle => BoardConfig::new_unchecked(14, 18, 40),
            Advanced => BoardConfig::new_unchecked(20, 24, 99),
        }
    }
}

impl From<GameLevel> for BoardConfig {
    fn from(level: GameLevel) -> Self {
        level.config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
