use core::fmt;
use serde::{Deserialize, Serialize};

use crate::MarkOutcome;

/// What a cell holds. Fixed once the board is generated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    LandMine,
    /// Count of adjacent land mines, always in `1..=8`.
    Number(u8),
    #[default]
    Empty,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    opened: bool,
    flagged: bool,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            opened: false,
            flagged: false,
        }
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn open(&mut self) {
        self.opened = true;
    }

    /// Toggles the flag on a closed cell. Opened cells ignore flagging.
    pub fn flag(&mut self) -> MarkOutcome {
        if self.opened {
            return MarkOutcome::NoChange;
        }
        self.flagged = !self.flagged;
        MarkOutcome::Changed
    }

    pub const fn is_land_mine(&self) -> bool {
        matches!(self.kind, CellKind::LandMine)
    }

    pub const fn has_land_mine_count(&self) -> bool {
        matches!(self.kind, CellKind::Number(_))
    }

    pub const fn is_opened(&self) -> bool {
        self.opened
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Opened or flagged. Every cell has to be checked for the game to be won.
    pub const fn is_checked(&self) -> bool {
        self.opened || self.flagged
    }

    pub const fn sign(&self) -> CellSign {
        match (self.opened, self.flagged, self.kind) {
            (false, false, _) => CellSign::Unchecked,
            (false, true, _) => CellSign::Flag,
            (true, _, CellKind::LandMine) => CellSign::LandMine,
            (true, _, CellKind::Number(count)) => CellSign::Number(count),
            (true, _, CellKind::Empty) => CellSign::Empty,
        }
    }
}

/// Player-visible face of a cell, mapped to a glyph by `Display`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellSign {
    Unchecked,
    Flag,
    LandMine,
    Number(u8),
    Empty,
}

impl fmt::Display for CellSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => f.write_str("□"),
            Self::Flag => f.write_str("⚑"),
            Self::LandMine => f.write_str("☼"),
            Self::Number(count) => write!(f, "{count}"),
            Self::Empty => f.write_str("■"),
        }
    }
}
