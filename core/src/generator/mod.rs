use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait HazardGenerator {
    /// Returns the positions of the land mines for a board of the given configuration.
    fn generate(self, config: BoardConfig) -> Result<Vec<Coord2>>;
}
