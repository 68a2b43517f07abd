//! Grid value types: kind, hex axis, descriptor, cells.
//!
//! - `GridDescriptor` is validated on construction and immutable afterwards.
//! - `Cell` doubles as an absolute cell and as an offset relative to an anchor.
//! - `HexAxis::orient` is the single row/column transpose used by every module.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use nalgebra::Vector2;

use crate::error::GeometryError;

/// Continuous pixel-space point.
pub type PixelPoint = Vector2<f64>;

/// Kind of the active grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GridKind {
    Gridless,
    Square,
    Hex,
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridKind::Gridless => "gridless",
            GridKind::Square => "square",
            GridKind::Hex => "hex",
        };
        f.write_str(name)
    }
}

/// Stagger axis of a hex grid.
///
/// `RowMajor`: cells form rows, alternate rows are shifted horizontally by half
/// a cell. `ColumnMajor`: cells form columns, alternate columns are shifted
/// vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HexAxis {
    #[default]
    RowMajor,
    ColumnMajor,
}

impl HexAxis {
    /// Map a cell between this axis and the canonical row-major frame.
    /// The swap is an involution, so the same call converts both ways.
    #[inline]
    pub fn orient(self, cell: Cell) -> Cell {
        match self {
            HexAxis::RowMajor => cell,
            HexAxis::ColumnMajor => cell.transposed(),
        }
    }

    /// Point counterpart of [`HexAxis::orient`].
    #[inline]
    pub fn orient_point(self, p: PixelPoint) -> PixelPoint {
        match self {
            HexAxis::RowMajor => p,
            HexAxis::ColumnMajor => Vector2::new(p.y, p.x),
        }
    }

    #[inline]
    pub fn is_column_major(self) -> bool {
        matches!(self, HexAxis::ColumnMajor)
    }
}

/// Integer grid cell `(col, row)`; also used for offsets relative to an anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
    /// Component-wise sum, `None` when either coordinate leaves `i32`.
    #[inline]
    pub fn checked_add(self, rhs: Cell) -> Option<Cell> {
        Some(Cell::new(
            self.col.checked_add(rhs.col)?,
            self.row.checked_add(rhs.row)?,
        ))
    }
    #[inline]
    pub const fn transposed(self) -> Self {
        Self {
            col: self.row,
            row: self.col,
        }
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

/// Panics on `i32` overflow in debug builds; see [`Cell::checked_add`].
impl Add for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.col + rhs.col, self.row + rhs.row)
    }
}
impl Sub for Cell {
    type Output = Cell;
    #[inline]
    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.col - rhs.col, self.row - rhs.row)
    }
}
impl Neg for Cell {
    type Output = Cell;
    #[inline]
    fn neg(self) -> Cell {
        Cell::new(-self.col, -self.row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Immutable description of the active grid.
///
/// Invariants:
/// - `cell_width` and `cell_height` are strictly positive and finite.
/// - `hex_axis` and `hex_shift_is_even` only matter when `kind == Hex`.
///
/// For hex grids the cell size is the bounding box of one hexagon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct GridDescriptor {
    kind: GridKind,
    cell_width: f64,
    cell_height: f64,
    hex_axis: HexAxis,
    hex_shift_is_even: bool,
}

impl GridDescriptor {
    pub fn new(
        kind: GridKind,
        cell_width: f64,
        cell_height: f64,
        hex_axis: HexAxis,
        hex_shift_is_even: bool,
    ) -> Result<Self, GeometryError> {
        check_extent("cell_width", cell_width)?;
        check_extent("cell_height", cell_height)?;
        Ok(Self {
            kind,
            cell_width,
            cell_height,
            hex_axis,
            hex_shift_is_even,
        })
    }

    /// Gridless canvas; the unit cell size only feeds the raw transforms.
    pub fn gridless() -> Self {
        Self {
            kind: GridKind::Gridless,
            cell_width: 1.0,
            cell_height: 1.0,
            hex_axis: HexAxis::RowMajor,
            hex_shift_is_even: false,
        }
    }

    pub fn square(cell_width: f64, cell_height: f64) -> Result<Self, GeometryError> {
        Self::new(GridKind::Square, cell_width, cell_height, HexAxis::RowMajor, false)
    }

    pub fn hex(
        cell_width: f64,
        cell_height: f64,
        hex_axis: HexAxis,
        hex_shift_is_even: bool,
    ) -> Result<Self, GeometryError> {
        Self::new(GridKind::Hex, cell_width, cell_height, hex_axis, hex_shift_is_even)
    }

    /// Regular hexagons with the given circumradius, sized the way a
    /// pointy-top (rows) or flat-top (columns) tiling needs.
    pub fn regular_hex(
        radius: f64,
        hex_axis: HexAxis,
        hex_shift_is_even: bool,
    ) -> Result<Self, GeometryError> {
        let across_flats = 3f64.sqrt() * radius;
        let across_corners = 2.0 * radius;
        match hex_axis {
            HexAxis::RowMajor => {
                Self::hex(across_flats, across_corners, hex_axis, hex_shift_is_even)
            }
            HexAxis::ColumnMajor => {
                Self::hex(across_corners, across_flats, hex_axis, hex_shift_is_even)
            }
        }
    }

    #[inline]
    pub fn kind(&self) -> GridKind {
        self.kind
    }
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }
    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }
    #[inline]
    pub fn hex_axis(&self) -> HexAxis {
        self.hex_axis
    }
    #[inline]
    pub fn hex_shift_is_even(&self) -> bool {
        self.hex_shift_is_even
    }
    #[inline]
    pub fn is_hex(&self) -> bool {
        self.kind == GridKind::Hex
    }
    #[inline]
    pub fn is_gridless(&self) -> bool {
        self.kind == GridKind::Gridless
    }

    /// Parity of the canonical rows that are *not* staggered.
    #[inline]
    pub(crate) fn shifted_parity(&self) -> i32 {
        if self.hex_shift_is_even {
            1
        } else {
            0
        }
    }

    /// Cell size seen from the canonical row-major frame.
    #[inline]
    pub(crate) fn canonical_size(&self) -> (f64, f64) {
        match self.hex_axis {
            HexAxis::RowMajor => (self.cell_width, self.cell_height),
            HexAxis::ColumnMajor => (self.cell_height, self.cell_width),
        }
    }
}

fn check_extent(name: &str, value: f64) -> Result<(), GeometryError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::grid(format!(
            "{name} must be positive and finite, got {value}"
        )));
    }
    Ok(())
}

/// Unvalidated mirror of `GridDescriptor` used by deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    kind: GridKind,
    cell_width: f64,
    cell_height: f64,
    #[serde(default)]
    hex_axis: HexAxis,
    #[serde(default)]
    hex_shift_is_even: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for GridDescriptor {
    type Error = GeometryError;
    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        GridDescriptor::new(
            raw.kind,
            raw.cell_width,
            raw.cell_height,
            raw.hex_axis,
            raw.hex_shift_is_even,
        )
    }
}
