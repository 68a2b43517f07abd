//! Pixel↔cell transforms (the grid backend).
//!
//! Square grids are a plain lattice. Hex math is written once for the
//! canonical row-major frame; column-major grids transpose points and cells on
//! the way in and out (`HexAxis::orient`, `HexAxis::orient_point`).
//!
//! Canonical hex frame (bounding box `w × h`):
//! - row pitch `0.75·h`, column pitch `w`;
//! - a row is shifted right by `w/2` when `row mod 2 != shifted_parity`;
//! - origin = `(col·w + shift, row·0.75·h)`, center = origin + `(w/2, h/2)`.

use nalgebra::Vector2;

use super::cfg::GEOM_EPS;
use super::types::{Cell, GridDescriptor, GridKind, PixelPoint};

const HEX_ROW_PITCH: f64 = 0.75;

/// Hex geometry in the canonical frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HexFrame {
    w: f64,
    h: f64,
    shifted_parity: i32,
}

impl HexFrame {
    pub(crate) fn of(grid: &GridDescriptor) -> Self {
        let (w, h) = grid.canonical_size();
        Self {
            w,
            h,
            shifted_parity: grid.shifted_parity(),
        }
    }

    /// Whether a canonical row carries the half-cell stagger.
    #[inline]
    pub(crate) fn is_shifted(&self, row: i32) -> bool {
        row.rem_euclid(2) != self.shifted_parity
    }

    #[inline]
    fn row_pitch(&self) -> f64 {
        self.h * HEX_ROW_PITCH
    }

    #[inline]
    fn shift(&self, row: i32) -> f64 {
        if self.is_shifted(row) {
            self.w / 2.0
        } else {
            0.0
        }
    }

    fn origin(&self, c: Cell) -> PixelPoint {
        Vector2::new(
            c.col as f64 * self.w + self.shift(c.row),
            c.row as f64 * self.row_pitch(),
        )
    }

    fn center(&self, c: Cell) -> PixelPoint {
        self.origin(c) + Vector2::new(self.w / 2.0, self.h / 2.0)
    }

    /// Cell whose center is nearest to `p`; ties keep the first candidate in
    /// (row, col) scan order so the answer is deterministic.
    fn nearest(&self, p: PixelPoint) -> Cell {
        let row_guess = ((p.y - self.h / 2.0) / self.row_pitch()).round() as i32;
        let mut best = Cell::new(0, row_guess);
        let mut best_d2 = f64::INFINITY;
        for row in row_guess - 1..=row_guess + 1 {
            let col_guess = ((p.x - self.shift(row) - self.w / 2.0) / self.w).round() as i32;
            for col in col_guess - 1..=col_guess + 1 {
                let cell = Cell::new(col, row);
                let d2 = (self.center(cell) - p).norm_squared();
                if d2 < best_d2 - GEOM_EPS {
                    best = cell;
                    best_d2 = d2;
                }
            }
        }
        best
    }

    /// Hexagon corners, clockwise from the top (pointy-top in this frame).
    fn vertices(&self, c: Cell) -> [PixelPoint; 6] {
        let ctr = self.center(c);
        let (hw, hh, qh) = (self.w / 2.0, self.h / 2.0, self.h / 4.0);
        [
            ctr + Vector2::new(0.0, -hh),
            ctr + Vector2::new(hw, -qh),
            ctr + Vector2::new(hw, qh),
            ctr + Vector2::new(0.0, hh),
            ctr + Vector2::new(-hw, qh),
            ctr + Vector2::new(-hw, -qh),
        ]
    }
}

impl GridDescriptor {
    /// Top-left corner of a cell's bounding box.
    pub fn cell_origin(&self, cell: Cell) -> PixelPoint {
        match self.kind() {
            GridKind::Hex => {
                let axis = self.hex_axis();
                let p = HexFrame::of(self).origin(axis.orient(cell));
                axis.orient_point(p)
            }
            GridKind::Square | GridKind::Gridless => Vector2::new(
                cell.col as f64 * self.cell_width(),
                cell.row as f64 * self.cell_height(),
            ),
        }
    }

    /// Center of a cell.
    pub fn cell_center(&self, cell: Cell) -> PixelPoint {
        match self.kind() {
            GridKind::Hex => {
                let axis = self.hex_axis();
                let p = HexFrame::of(self).center(axis.orient(cell));
                axis.orient_point(p)
            }
            GridKind::Square | GridKind::Gridless => {
                self.cell_origin(cell)
                    + Vector2::new(self.cell_width() / 2.0, self.cell_height() / 2.0)
            }
        }
    }

    /// Cell containing `p` (nearest center for hex grids).
    pub fn cell_at(&self, p: PixelPoint) -> Cell {
        match self.kind() {
            GridKind::Hex => {
                let axis = self.hex_axis();
                axis.orient(HexFrame::of(self).nearest(axis.orient_point(p)))
            }
            GridKind::Square | GridKind::Gridless => Cell::new(
                (p.x / self.cell_width()).floor() as i32,
                (p.y / self.cell_height()).floor() as i32,
            ),
        }
    }

    /// Center of the cell containing `p`. Gridless canvases return `p`.
    pub fn snap_to_center(&self, p: PixelPoint) -> PixelPoint {
        if self.is_gridless() {
            return p;
        }
        self.cell_center(self.cell_at(p))
    }

    /// Nearest lattice vertex: a square corner, or a corner of the hexagon
    /// containing `p`. Gridless canvases return `p`.
    pub fn nearest_vertex(&self, p: PixelPoint) -> PixelPoint {
        match self.kind() {
            GridKind::Gridless => p,
            GridKind::Square => Vector2::new(
                (p.x / self.cell_width()).round() * self.cell_width(),
                (p.y / self.cell_height()).round() * self.cell_height(),
            ),
            GridKind::Hex => {
                let axis = self.hex_axis();
                let frame = HexFrame::of(self);
                let q = axis.orient_point(p);
                let corners = frame.vertices(frame.nearest(q));
                let mut best = corners[0];
                for v in &corners[1..] {
                    if (v - q).norm_squared() < (best - q).norm_squared() - GEOM_EPS {
                        best = *v;
                    }
                }
                axis.orient_point(best)
            }
        }
    }

    /// The six corners of a hex cell, or the four corners of a square cell.
    pub fn cell_vertices(&self, cell: Cell) -> Vec<PixelPoint> {
        match self.kind() {
            GridKind::Hex => {
                let axis = self.hex_axis();
                HexFrame::of(self)
                    .vertices(axis.orient(cell))
                    .iter()
                    .map(|v| axis.orient_point(*v))
                    .collect()
            }
            GridKind::Square | GridKind::Gridless => {
                let o = self.cell_origin(cell);
                let (w, h) = (self.cell_width(), self.cell_height());
                vec![
                    o,
                    o + Vector2::new(w, 0.0),
                    o + Vector2::new(w, h),
                    o + Vector2::new(0.0, h),
                ]
            }
        }
    }
}
