use alloc::collections::BTreeSet;

use super::*;

/// Places land mines exactly where the caller says, for scripted games and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedHazardGenerator {
    land_mines: Vec<Coord2>,
}

impl FixedHazardGenerator {
    pub fn new(land_mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            land_mines: land_mines.into(),
        }
    }
}

impl HazardGenerator for FixedHazardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Vec<Coord2>> {
        config.validate()?;

        if let Some(&(row, col)) = self
            .land_mines
            .iter()
            .find(|&&pos| !in_bounds(pos, config.size()))
        {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: config.rows,
                cols: config.cols,
            });
        }

        let distinct = self.land_mines.iter().collect::<BTreeSet<_>>().len();
        if distinct != self.land_mines.len()
            || self.land_mines.len() as CellCount != config.land_mines
        {
            log::warn!(
                "Rejected land mine layout, got {} positions ({} distinct) for {} mines",
                self.land_mines.len(),
                distinct,
                config.land_mines
            );
            return Err(GameError::HazardLayoutMismatch);
        }

        Ok(self.land_mines)
    }
}
