//! Grid description and pixel↔cell transforms.
//!
//! Purpose
//! - `GridDescriptor`: validated, immutable description of the active grid.
//! - `Cell`, `PixelPoint`: integer grid space and continuous pixel space.
//! - Transforms (`cell_origin`, `cell_center`, `cell_at`, `nearest_vertex`)
//!   that the snapping and highlight passes build on.
//!
//! Conventions
//! - Hex math lives in a canonical row-major frame; `HexAxis::orient` transposes
//!   column-major grids in and out, so no hex rule is written twice.
//! - `hex_shift_is_even`: even rows (columns) carry the half-cell stagger;
//!   otherwise odd rows (columns) do.

mod cfg;
mod transform;
mod types;

pub use cfg::{points_close, GEOM_EPS};
pub(crate) use transform::HexFrame;
pub use types::{Cell, GridDescriptor, GridKind, HexAxis, PixelPoint};

#[cfg(test)]
mod tests;
