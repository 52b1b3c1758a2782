// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-to-cell hit queries: the inverse of the forward vertex mapping.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::coord::{CellCoord, SignedCoord};
use crate::grid::TriGrid;

impl TriGrid {
    /// Returns the cell whose polygon encloses the given pixel position.
    ///
    /// This inverts the lattice mapping to find a small set of candidate
    /// cells around the position, then resolves with an exact
    /// point-in-triangle test against each candidate's actual pixel
    /// polygon. Points on a shared edge belong to more than one polygon;
    /// the candidate with the smallest signed coordinates wins, so the
    /// result is deterministic. Points outside the grid return `None`.
    ///
    /// Callers typically use this to translate pointer/input events into
    /// dirty marks.
    ///
    /// ```rust
    /// use kurbo::Point;
    /// use tritile_grid::{GridConfig, TriGrid};
    ///
    /// let grid = TriGrid::build(&GridConfig::new(200.0, 200.0)).unwrap();
    /// let cell = grid.cell_at(Point::new(100.0, 100.0)).unwrap();
    /// assert!(grid.cell_at(Point::new(-500.0, 0.0)).is_none());
    /// # let _ = cell;
    /// ```
    #[must_use]
    pub fn cell_at(&self, position: Point) -> Option<CellCoord> {
        let (x_offset, y_offset) = self.pixel_offset();
        let u = (position.x - x_offset) / self.column_width();
        let v = (position.y - y_offset) / (self.triangle_side() / 2.0);
        if !u.is_finite() || !v.is_finite() {
            return None;
        }
        let band = u.floor();
        let line = v.floor();

        // Vertex truncation shifts polygon edges by less than one pixel
        // relative to the exact lattice. One pixel can span up to two
        // lattice units on very dense grids, so the enclosing cell sits
        // within two bands/lines of the exact inverse. Scan the small
        // candidate window in deterministic order.
        for column in [band - 1.0, band, band + 1.0, band + 2.0] {
            for row in [line - 2.0, line - 1.0, line, line + 1.0, line + 2.0, line + 3.0] {
                let Some(signed) = signed_from_f64(column, row) else {
                    continue;
                };
                let Some(cell) = self.from_signed(signed) else {
                    continue;
                };
                let Ok(triangle) = self.cell_points(cell) else {
                    continue;
                };
                if triangle_contains(&triangle, position) {
                    return Some(cell);
                }
            }
        }
        None
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the value is range-checked against i32 first"
)]
fn signed_from_f64(column: f64, row: f64) -> Option<SignedCoord> {
    let in_range =
        |v: f64| v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX);
    (in_range(column) && in_range(row)).then(|| SignedCoord::new(column as i32, row as i32))
}

/// Exact, boundary-inclusive point-in-triangle test.
pub(crate) fn triangle_contains(triangle: &[Point; 3], p: Point) -> bool {
    let d0 = edge_sign(triangle[0], triangle[1], p);
    let d1 = edge_sign(triangle[1], triangle[2], p);
    let d2 = edge_sign(triangle[2], triangle[0], p);
    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

fn edge_sign(a: Point, b: Point, p: Point) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}
