//! Half-cell correction for even-sized footprints.
//!
//! An even footprint's anchor sits on a cell boundary or vertex after
//! snapping; this pass moves the ruler waypoints onto the anchor cell center.
//! The footprint enumeration is left untouched.
//!
//! - Square: `+w/2` for even width, `+h/2` for even height.
//! - Hex: shift by half a cell along the stagger axis (`y` for rows, `x` for
//!   columns) when the footprint is even along it. The sign follows the cluster
//!   mirror: `-` when `alt_orientation != column_major`, `+` otherwise.
//!
//! Invalid footprints are rejected on every grid kind.

use nalgebra::Vector2;

use crate::error::GeometryError;
use crate::footprint::Footprint;
use crate::grid::{GridDescriptor, GridKind, PixelPoint};

/// Offset added to every waypoint of this footprint.
pub fn centering_offset(
    footprint: &Footprint,
    grid: &GridDescriptor,
) -> Result<PixelPoint, GeometryError> {
    footprint.validate()?;
    let offset = match grid.kind() {
        GridKind::Gridless => Vector2::zeros(),
        GridKind::Square => Vector2::new(
            half_if(footprint.width_is_even(), grid.cell_width()),
            half_if(footprint.height_is_even(), grid.cell_height()),
        ),
        GridKind::Hex => {
            let axis = grid.hex_axis();
            let even_along_stagger = if axis.is_column_major() {
                footprint.width_is_even()
            } else {
                footprint.height_is_even()
            };
            let (_, canonical_h) = grid.canonical_size();
            let mirrored = footprint.alt_orientation != axis.is_column_major();
            let sign = if mirrored { -1.0 } else { 1.0 };
            let shift = sign * half_if(even_along_stagger, canonical_h);
            axis.orient_point(Vector2::new(0.0, shift))
        }
    };
    Ok(offset)
}

/// Waypoints shifted onto the visual center of the token; same length and order.
pub fn center_waypoints(
    waypoints: &[PixelPoint],
    footprint: &Footprint,
    grid: &GridDescriptor,
) -> Result<Vec<PixelPoint>, GeometryError> {
    let offset = centering_offset(footprint, grid)?;
    Ok(waypoints.iter().map(|p| p + offset).collect())
}

#[inline]
fn half_if(even: bool, extent: f64) -> f64 {
    if even {
        extent / 2.0
    } else {
        0.0
    }
}
