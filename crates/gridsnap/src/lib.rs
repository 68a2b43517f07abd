//! Token footprint and snapping geometry for grid-based tabletops.
//!
//! Pipeline
//! - `GridDescriptor` describes the active grid (gridless, square, hex rows or
//!   hex columns) and owns the pixel↔cell transforms.
//! - `snap::resolve_snap` maps a dragged point to a cell center or vertex.
//! - `shape::enumerate_shape` lists the cell offsets a footprint covers.
//! - `highlight::project_highlight_cells` turns an anchored shape into pixels.
//! - `centering::center_waypoints` moves even-sized tokens onto cell centers.
//!
//! Every function is pure; callers may invoke them from any thread.

pub mod centering;
pub mod error;
pub mod footprint;
pub mod grid;
pub mod highlight;
pub mod shape;
pub mod snap;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use centering::center_waypoints;
pub use error::GeometryError;
pub use footprint::Footprint;
pub use grid::{Cell, GridDescriptor, GridKind, HexAxis, PixelPoint, GEOM_EPS};
pub use highlight::{project_highlight_cells, project_highlight_centers};
pub use shape::{enumerate_shape, Anomaly, Shape};
pub use snap::{resolve_snap, snap_waypoints, HexSizeSupport, NearestVertexSnap};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::centering::center_waypoints;
    pub use crate::error::GeometryError;
    pub use crate::footprint::Footprint;
    pub use crate::grid::{
        points_close, Cell, GridDescriptor, GridKind, HexAxis, PixelPoint, GEOM_EPS,
    };
    pub use crate::highlight::{project_highlight_cells, project_highlight_centers};
    pub use crate::shape::{enumerate_shape, Anomaly, Shape};
    pub use crate::snap::{resolve_snap, snap_waypoints, HexSizeSupport, NearestVertexSnap};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests_properties;
