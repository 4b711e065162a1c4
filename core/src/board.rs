use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;

use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    initialized: bool,
}

impl Board {
    /// Fails on configurations that skipped validation, e.g. literals or deserialized input.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            initialized: false,
        })
    }

    /// One-shot generation: place the land mines, then turn every cell next to one into a number.
    pub fn initialize_game(&mut self, generator: impl HazardGenerator) -> Result<()> {
        if self.initialized {
            log::warn!("Board initialized twice, keeping the existing layout");
            return Err(GameError::AlreadyInitialized);
        }

        let land_mines = generator.generate(self.config)?;

        self.cells.fill(Cell::new(CellKind::Empty));
        for coords in land_mines {
            let coords = self.validate_coords(coords)?;
            self.cells[coords.to_nd_index()] = Cell::new(CellKind::LandMine);
        }

        // double check mine count, duplicates would silently lower it
        let placed = self.cells.iter().filter(|cell| cell.is_land_mine()).count();
        if placed as CellCount != self.config.land_mines {
            log::warn!(
                "Generated land mine count mismatch, actual: {}, requested: {}",
                placed,
                self.config.land_mines
            );
            return Err(GameError::HazardLayoutMismatch);
        }

        let size = self.config.size();
        for row in 0..size.0 {
            for col in 0..size.1 {
                let coords = (row, col);
                if self.cells[coords.to_nd_index()].is_land_mine() {
                    continue;
                }
                let count = self.count_nearby_land_mines(coords);
                if count > 0 {
                    self.cells[coords.to_nd_index()] = Cell::new(CellKind::Number(count));
                }
            }
        }

        self.initialized = true;
        log::debug!(
            "Generated {}x{} board with {} land mines",
            size.0,
            size.1,
            self.config.land_mines
        );
        Ok(())
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn row_size(&self) -> Coord {
        self.config.rows
    }

    pub fn col_size(&self) -> Coord {
        self.config.cols
    }

    pub fn land_mine_count(&self) -> CellCount {
        self.config.land_mines
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<&Cell> {
        let coords = self.checked_coords((row, col))?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn flag(&mut self, row: Coord, col: Coord) -> Result<MarkOutcome> {
        Ok(self.cell_mut(row, col)?.flag())
    }

    pub fn open(&mut self, row: Coord, col: Coord) -> Result<()> {
        self.cell_mut(row, col)?.open();
        Ok(())
    }

    pub fn is_land_mine_cell(&self, row: Coord, col: Coord) -> Result<bool> {
        Ok(self.cell(row, col)?.is_land_mine())
    }

    pub fn sign(&self, row: Coord, col: Coord) -> Result<CellSign> {
        Ok(self.cell(row, col)?.sign())
    }

    /// Win condition: every cell opened or flagged. A flagged land mine counts as checked.
    pub fn is_all_cell_checked(&self) -> bool {
        self.initialized && self.cells.iter().all(Cell::is_checked)
    }

    /// Opens the cell and, if it's empty, the whole connected region of empty cells plus the numbers bordering it.
    ///
    /// Land mines are never opened. Positions off the board are ignored, including the starting one.
    pub fn open_surrounded_land_mines(&mut self, row: Coord, col: Coord) -> Result<()> {
        self.check_initialized()?;

        let size = self.config.size();
        let mut opened: CellCount = 0;
        let mut to_visit = Vec::from([(row, col)]);

        while let Some(coords) = to_visit.pop() {
            if !in_bounds(coords, size) {
                continue;
            }

            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_opened() || cell.is_land_mine() {
                continue;
            }

            cell.open();
            opened += 1;

            if cell.has_land_mine_count() {
                continue;
            }

            to_visit.extend(surrounding(coords));
        }

        log::trace!("Cascade from ({}, {}) opened {} cells", row, col, opened);
        Ok(())
    }

    fn cell_mut(&mut self, row: Coord, col: Coord) -> Result<&mut Cell> {
        let coords = self.checked_coords((row, col))?;
        Ok(&mut self.cells[coords.to_nd_index()])
    }

    fn checked_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.check_initialized()?;
        self.validate_coords(coords)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.config.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                row: coords.0,
                col: coords.1,
                rows: self.config.rows,
                cols: self.config.cols,
            })
        }
    }

    fn check_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(GameError::NotInitialized)
        }
    }

    fn count_nearby_land_mines(&self, coords: Coord2) -> u8 {
        NeighborIter::new(coords, self.config.size())
            .filter(|&pos| self.cells[pos.to_nd_index()].is_land_mine())
            .count() as u8
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let mut signs = row.iter().map(Cell::sign);
            if let Some(first) = signs.next() {
                write!(f, "{first}")?;
            }
            for sign in signs {
                write!(f, " {sign}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
