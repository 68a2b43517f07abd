//! Anchored shape → pixel coordinates for the highlight layer.
//!
//! Square grids map `anchor + offset` straight through the lattice. Hex shape
//! offsets assume the anchor sits on an unshifted row, so when it does not,
//! offsets on odd rows are moved one column right before projecting
//! (columns/rows swapped on column-major grids).

use crate::error::GeometryError;
use crate::grid::{Cell, GridDescriptor, GridKind, HexFrame, PixelPoint};
use crate::shape::Shape;

/// Absolute cells covered by `shape` anchored at `anchor`, parity-corrected on
/// hex grids. One cell per offset, in shape order.
///
/// Errors: `UnsupportedGridKind` on gridless canvases; `CellOutOfRange` when
/// an offset would push a cell past the `i32` range.
pub fn covered_cells(
    anchor: Cell,
    shape: &Shape,
    grid: &GridDescriptor,
) -> Result<Vec<Cell>, GeometryError> {
    match grid.kind() {
        GridKind::Gridless => Err(GeometryError::UnsupportedGridKind { kind: grid.kind() }),
        GridKind::Square => shape
            .iter()
            .map(|off| anchor.checked_add(*off).ok_or_else(|| out_of_range(anchor, *off)))
            .collect(),
        GridKind::Hex => {
            let axis = grid.hex_axis();
            let a = axis.orient(anchor);
            let anchor_shifted = HexFrame::of(grid).is_shifted(a.row);
            shape
                .iter()
                .map(|off| {
                    let o = axis.orient(*off);
                    let nudge = Cell::new(i32::from(anchor_shifted && o.row % 2 != 0), 0);
                    a.checked_add(o)
                        .and_then(|abs| abs.checked_add(nudge))
                        .map(|abs| axis.orient(abs))
                        .ok_or_else(|| out_of_range(anchor, *off))
                })
                .collect()
        }
    }
}

fn out_of_range(anchor: Cell, offset: Cell) -> GeometryError {
    GeometryError::CellOutOfRange { anchor, offset }
}

/// Pixel position of every covered cell: the top-left corner on square grids
/// (`cell × (w, h)`), the hexagon center on hex grids.
pub fn project_highlight_cells(
    anchor: Cell,
    shape: &Shape,
    grid: &GridDescriptor,
) -> Result<Vec<PixelPoint>, GeometryError> {
    let cells = covered_cells(anchor, shape, grid)?;
    let project = |c: &Cell| {
        if grid.is_hex() {
            grid.cell_center(*c)
        } else {
            grid.cell_origin(*c)
        }
    };
    Ok(cells.iter().map(project).collect())
}

/// Like [`project_highlight_cells`] but always returns cell centers.
pub fn project_highlight_centers(
    anchor: Cell,
    shape: &Shape,
    grid: &GridDescriptor,
) -> Result<Vec<PixelPoint>, GeometryError> {
    let cells = covered_cells(anchor, shape, grid)?;
    Ok(cells.iter().map(|c| grid.cell_center(*c)).collect())
}
