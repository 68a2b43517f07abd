//! Error type shared by all geometry operations.

use std::fmt;

use crate::grid::{Cell, GridKind};

/// Errors surfaced by shape enumeration, snapping, projection, and grid
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The operation needs discrete cells but the grid has none.
    UnsupportedGridKind { kind: GridKind },
    /// Width/height below one cell, or a negative border size.
    InvalidFootprint { reason: String },
    /// Cell size not strictly positive and finite.
    InvalidGrid { reason: String },
    /// An anchored shape reaches past the `i32` cell range.
    CellOutOfRange { anchor: Cell, offset: Cell },
}

impl GeometryError {
    pub(crate) fn footprint(reason: impl Into<String>) -> Self {
        Self::InvalidFootprint {
            reason: reason.into(),
        }
    }

    pub(crate) fn grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedGridKind { kind } => {
                write!(f, "operation is undefined on a {kind} grid")
            }
            Self::InvalidFootprint { reason } => write!(f, "invalid footprint: {reason}"),
            Self::InvalidGrid { reason } => write!(f, "invalid grid: {reason}"),
            Self::CellOutOfRange { anchor, offset } => {
                write!(f, "offset {offset} from anchor {anchor} leaves the cell range")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
