/// Single row or column index.
///
/// Signed so callers can hand over computed positions such as `row - 1`; anything negative is simply out of bounds.
pub type Coord = i16;

/// Count type used for land mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for coordinates already checked against the board size.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    if a <= 0 || b <= 0 {
        return 0;
    }
    (a as CellCount) * (b as CellCount)
}

pub const fn in_bounds((row, col): Coord2, (rows, cols): Coord2) -> bool {
    row >= 0 && row < rows && col >= 0 && col < cols
}

const DISPLACEMENTS: [Coord2; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Raw 8-neighbourhood of `coords`, including positions off the board.
pub(crate) fn surrounding(coords: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .into_iter()
        .map(move |(dr, dc)| (coords.0.saturating_add(dr), coords.1.saturating_add(dc)))
}

/// Iterates the in-bounds 8-neighbours of a cell, clipped at the board edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dr, dc)) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            let next_item = (
                self.center.0.saturating_add(dr),
                self.center.1.saturating_add(dc),
            );
            if in_bounds(next_item, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}
