//! Snap a dragged pixel point for a given token footprint.
//!
//! Rules
//! - Gridless: the point is returned unchanged.
//! - Square: odd width or height → nearest cell center; both even → nearest
//!   cell corner (the centering pass moves it back onto a center later).
//! - Hex: nearest cell center, except for even oversized tiers whose hex-size
//!   collaborator requests the alternate rule → collaborator's vertex snap.
//!
//! The hex-size collaborator is optional and passed explicitly; without one the
//! hex branch always center-snaps. Footprints are validated before any rule
//! runs, gridless canvases included.

use tracing::debug;

use crate::centering::center_waypoints;
use crate::error::GeometryError;
use crate::footprint::Footprint;
use crate::grid::{GridDescriptor, GridKind, PixelPoint};

/// Optional capability provided by a hex token-size extension.
pub trait HexSizeSupport {
    /// Whether the alternate (vertex) snapping rule is active for this token.
    fn alt_snapping(&self, footprint: &Footprint) -> bool;
    /// Vertex snap primitive used when the alternate rule applies.
    fn vertex_snap(&self, point: PixelPoint, grid: &GridDescriptor) -> PixelPoint;
}

/// Stock collaborator: a fixed alternate-snapping flag and nearest-vertex snap.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestVertexSnap {
    pub alt_snapping: bool,
}

impl NearestVertexSnap {
    pub fn new(alt_snapping: bool) -> Self {
        Self { alt_snapping }
    }
}

impl HexSizeSupport for NearestVertexSnap {
    fn alt_snapping(&self, footprint: &Footprint) -> bool {
        self.alt_snapping && footprint.is_oversized_hex()
    }

    fn vertex_snap(&self, point: PixelPoint, grid: &GridDescriptor) -> PixelPoint {
        grid.nearest_vertex(point)
    }
}

/// Pixel point a dragged `point` snaps to. Idempotent.
///
/// Errors: `InvalidFootprint` for sizes below one cell or a negative border
/// size.
pub fn resolve_snap(
    point: PixelPoint,
    footprint: &Footprint,
    grid: &GridDescriptor,
    hex_support: Option<&dyn HexSizeSupport>,
) -> Result<PixelPoint, GeometryError> {
    footprint.validate()?;
    Ok(snap_point(point, footprint, grid, hex_support))
}

/// Snap rules proper; `footprint` is already validated.
fn snap_point(
    point: PixelPoint,
    footprint: &Footprint,
    grid: &GridDescriptor,
    hex_support: Option<&dyn HexSizeSupport>,
) -> PixelPoint {
    match grid.kind() {
        GridKind::Gridless => point,
        GridKind::Square => {
            if footprint.width_is_even() && footprint.height_is_even() {
                grid.nearest_vertex(point)
            } else {
                grid.snap_to_center(point)
            }
        }
        GridKind::Hex => {
            if let Some(support) = hex_support {
                let even_tier = footprint.is_oversized_hex()
                    && footprint.effective_border_size() % 2 == 0;
                if even_tier && support.alt_snapping(footprint) {
                    debug!(
                        border_size = footprint.hex_border_size,
                        "alternate hex snapping: vertex"
                    );
                    return support.vertex_snap(point, grid);
                }
            }
            grid.snap_to_center(point)
        }
    }
}

/// Snap every raw waypoint, then apply the even-footprint centering pass.
pub fn snap_waypoints(
    points: &[PixelPoint],
    footprint: &Footprint,
    grid: &GridDescriptor,
    hex_support: Option<&dyn HexSizeSupport>,
) -> Result<Vec<PixelPoint>, GeometryError> {
    footprint.validate()?;
    let snapped: Vec<PixelPoint> = points
        .iter()
        .map(|p| snap_point(*p, footprint, grid, hex_support))
        .collect();
    center_waypoints(&snapped, footprint, grid)
}
