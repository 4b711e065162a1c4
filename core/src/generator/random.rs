use super::*;

/// Uniformly random layout of distinct land mine positions, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomHazardGenerator {
    seed: u64,
}

impl RandomHazardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HazardGenerator for RandomHazardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Vec<Coord2>> {
        use rand::prelude::*;

        config.validate()?;

        let total_cells = config.total_cells() as usize;
        let land_mines = config.land_mines as usize;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // partial Fisher-Yates: the first `land_mines` slots end up a uniform sample without repeats
        let mut cells: Vec<CellCount> = (0..config.total_cells()).collect();
        for i in 0..land_mines {
            let j = rng.random_range(i..total_cells);
            cells.swap(i, j);
        }

        let cols = config.cols as CellCount;
        Ok(cells[..land_mines]
            .iter()
            .map(|&index| ((index / cols) as Coord, (index % cols) as Coord))
            .collect())
    }
}
