use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Row and column are reported 1-indexed, the way a player would type them.
    #[error(
        "Cell ({}, {}) is outside the {rows}x{cols} board",
        one_based(.row),
        one_based(.col)
    )]
    OutOfBounds {
        row: Coord,
        col: Coord,
        rows: Coord,
        cols: Coord,
    },
    #[error("Board has not been initialized yet")]
    NotInitialized,
    #[error("Board was already initialized")]
    AlreadyInitialized,
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Board needs at least one land mine")]
    NoLandMines,
    #[error("Too many land mines")]
    TooManyLandMines,
    #[error("Generated land mine layout does not match the board configuration")]
    HazardLayoutMismatch,
}

fn one_based(index: &Coord) -> i32 {
    i32::from(*index) + 1
}

pub type Result<T> = core::result::Result<T, GameError>;
