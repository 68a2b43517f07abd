//! Footprint → occupied cell offsets.
//!
//! Purpose
//! - Square grids: the full `W × H` rectangle, floor-biased around the anchor
//!   (a 2×2 token covers the anchor plus the cells up and to the left).
//! - Hex grids: a single cell, or a constant cluster for oversized tokens.
//!
//! Hex clusters
//! - Tables (`tables.rs`) are written in the canonical row-major frame.
//! - The row component is negated when `alt_orientation` differs from the
//!   grid's axis convention (`alt_orientation != column_major`).
//! - Column-major grids then transpose every offset (`HexAxis::orient`).
//! - Border sizes above the top tier are clamped and reported as an
//!   `Anomaly` rather than rejected.

mod tables;

use std::fmt;

use tracing::warn;

use crate::error::GeometryError;
use crate::footprint::{Footprint, MAX_HEX_BORDER_SIZE};
use crate::grid::{Cell, GridDescriptor, GridKind, HexAxis};

/// Recoverable irregularity noticed while enumerating a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// Border size above the defined tiers; the top tier was used instead.
    BorderSizeClamped { requested: i32, used: i32 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::BorderSizeClamped { requested, used } => write!(
                f,
                "hex border size {requested} has no cluster table; using size {used}"
            ),
        }
    }
}

/// Cell offsets a token covers, relative to its anchor cell.
///
/// Invariants:
/// - Each offset appears once.
/// - Order is deterministic (row by row for squares, table order for hex).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    offsets: Vec<Cell>,
    anomaly: Option<Anomaly>,
}

impl Shape {
    /// Shape covering only the anchor cell.
    pub fn single() -> Self {
        Self {
            offsets: vec![Cell::new(0, 0)],
            anomaly: None,
        }
    }

    #[inline]
    pub fn offsets(&self) -> &[Cell] {
        &self.offsets
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.offsets.iter()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
    #[inline]
    pub fn contains(&self, offset: Cell) -> bool {
        self.offsets.contains(&offset)
    }
    #[inline]
    pub fn anomaly(&self) -> Option<Anomaly> {
        self.anomaly
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

/// Cells a footprint occupies on the given grid.
///
/// Errors: `InvalidFootprint` for sizes below one cell or a negative border
/// size; `UnsupportedGridKind` on gridless canvases.
pub fn enumerate_shape(
    footprint: &Footprint,
    grid: &GridDescriptor,
) -> Result<Shape, GeometryError> {
    footprint.validate()?;
    match grid.kind() {
        GridKind::Gridless => Err(GeometryError::UnsupportedGridKind { kind: grid.kind() }),
        GridKind::Square => Ok(Shape {
            offsets: square_rect(footprint),
            anomaly: None,
        }),
        GridKind::Hex if !footprint.is_oversized_hex() => Ok(Shape::single()),
        GridKind::Hex => Ok(hex_cluster(footprint, grid.hex_axis())),
    }
}

/// `[-⌊w/2⌋, ⌈w/2⌉-1] × [-⌊h/2⌋, ⌈h/2⌉-1]`, row outer, column inner.
fn square_rect(footprint: &Footprint) -> Vec<Cell> {
    let (width, height) = (footprint.width_cells, footprint.height_cells);
    let left = -(width / 2);
    let top = -(height / 2);
    let mut out = Vec::with_capacity(footprint.cell_count());
    for row in top..top + height {
        for col in left..left + width {
            out.push(Cell::new(col, row));
        }
    }
    out
}

fn hex_cluster(footprint: &Footprint, axis: HexAxis) -> Shape {
    let used = footprint.effective_border_size();
    let anomaly = footprint.is_border_clamped().then(|| {
        warn!(
            requested = footprint.hex_border_size,
            used = MAX_HEX_BORDER_SIZE,
            "hex border size out of range; clamped"
        );
        Anomaly::BorderSizeClamped {
            requested: footprint.hex_border_size,
            used,
        }
    });
    let mirror = footprint.alt_orientation != axis.is_column_major();
    let mut offsets = Vec::with_capacity(tables::cluster_len(used as usize));
    for c in tables::canonical_cluster(used as usize) {
        let c = if mirror { Cell::new(c.col, -c.row) } else { c };
        offsets.push(axis.orient(c));
    }
    Shape { offsets, anomaly }
}
