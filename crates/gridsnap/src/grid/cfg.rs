//! Tolerance defaults for grid geometry.
//!
//! Policy
//! - Pixel coordinates come from user input and are at most a few 1e5 px, so a
//!   single absolute epsilon is enough. Tie-breaks and test comparisons use it.

/// Absolute tolerance for pixel comparisons and nearest-candidate tie-breaks.
pub const GEOM_EPS: f64 = 1e-9;

/// Compare two pixel points component-wise within `eps`.
#[inline]
pub fn points_close(a: super::PixelPoint, b: super::PixelPoint, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}
