//! Token footprint: declared size in cells plus the oversized-hex extension.

use crate::error::GeometryError;

/// Largest oversized-hex tier with a defined cluster.
pub const MAX_HEX_BORDER_SIZE: i32 = 4;

/// Declared size of a token.
///
/// Fields are signed because they come straight from token data; `validate`
/// rejects the values that make no sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Footprint {
    pub width_cells: i32,
    pub height_cells: i32,
    /// 0 = plain width/height; 1..=4 = oversized hex cluster tier.
    pub hex_border_size: i32,
    /// Mirrors the hex cluster (hex grids only).
    pub alt_orientation: bool,
}

impl Default for Footprint {
    fn default() -> Self {
        Self::square(1, 1)
    }
}

impl Footprint {
    pub fn square(width_cells: i32, height_cells: i32) -> Self {
        Self {
            width_cells,
            height_cells,
            hex_border_size: 0,
            alt_orientation: false,
        }
    }

    /// Oversized hex token; width/height follow the tier so the centering
    /// pass sees the same parity as the cluster.
    pub fn hex_cluster(hex_border_size: i32, alt_orientation: bool) -> Self {
        Self {
            width_cells: hex_border_size.max(1),
            height_cells: hex_border_size.max(1),
            hex_border_size,
            alt_orientation,
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.width_cells < 1 || self.height_cells < 1 {
            return Err(GeometryError::footprint(format!(
                "size must be at least 1x1 cells, got {}x{}",
                self.width_cells, self.height_cells
            )));
        }
        if self.hex_border_size < 0 {
            return Err(GeometryError::footprint(format!(
                "hex border size must be >= 0, got {}",
                self.hex_border_size
            )));
        }
        Ok(())
    }

    /// `width × height`, computed in `usize` so large footprints don't wrap.
    /// Non-positive sides count as zero.
    #[inline]
    pub fn cell_count(&self) -> usize {
        let side = |n: i32| usize::try_from(n).unwrap_or(0);
        side(self.width_cells) * side(self.height_cells)
    }

    /// Border size after clamping to the defined tiers.
    #[inline]
    pub fn effective_border_size(&self) -> i32 {
        self.hex_border_size.clamp(0, MAX_HEX_BORDER_SIZE)
    }

    #[inline]
    pub fn is_border_clamped(&self) -> bool {
        self.hex_border_size > MAX_HEX_BORDER_SIZE
    }

    #[inline]
    pub fn is_oversized_hex(&self) -> bool {
        self.hex_border_size > 0
    }

    #[inline]
    pub fn width_is_even(&self) -> bool {
        self.width_cells % 2 == 0
    }

    #[inline]
    pub fn height_is_even(&self) -> bool {
        self.height_cells % 2 == 0
    }
}
