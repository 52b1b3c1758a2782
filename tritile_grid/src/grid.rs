// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid construction and forward geometry queries.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::config::GridConfig;
use crate::coord::{CellCoord, Orientation, SignedCoord};
use crate::error::{InvalidConfiguration, OutOfRange};

/// Spare column bands added on each side so the tiling overhangs the
/// visible rectangle after centering.
const COLUMN_MARGIN: f64 = 2.0;

/// A triangular tessellation of a rectangular surface.
///
/// `TriGrid` owns the tiling parameters and an immutable vertex table
/// mapping every storage `(column, row)` cell to the exact pixel polygon
/// it occupies. Construction is a pure function of the [`GridConfig`]:
/// building twice from the same configuration yields identical tables.
///
/// The grid is fixed for its lifetime. A surface size or density change
/// requires rebuilding the grid wholesale; nothing resizes in place.
///
/// # Geometry
///
/// Triangle vertices live on a lattice whose horizontal unit is the
/// column width (the altitude of one equilateral triangle) and whose
/// vertical unit is half the triangle side. Every vertex is produced by
/// one shared lattice-to-pixel helper, so a vertex shared between two
/// adjacent cells is computed by the same float expression and compares
/// bit-identical: the tiling has no seams. Pixel coordinates are
/// truncated to integers after the centering translation is applied.
#[derive(Clone, Debug)]
pub struct TriGrid {
    config: GridConfig,
    triangle_side: f64,
    column_width: f64,
    columns: u32,
    rows: u32,
    x_offset: f64,
    y_offset: f64,
    grid_offset_x: i32,
    grid_offset_y: i32,
    points: Vec<[Point; 3]>,
}

impl TriGrid {
    /// Builds the grid for the given configuration.
    ///
    /// The side length is chosen so that it divides the inclusive surface
    /// width (`surface_width + 1`, compensating for inclusive pixel-edge
    /// counting) into a whole number of triangle columns near the
    /// configured density. Row and column extents are sized generously
    /// and rounded up to even, so the centered index offsets stay
    /// symmetric and the tiling overhangs the surface on every side.
    ///
    /// # Errors
    ///
    /// - [`InvalidConfiguration`]: Returned when the configuration fails
    ///   [`GridConfig::validate`], or when the derived extents cannot be
    ///   represented.
    pub fn build(config: &GridConfig) -> Result<Self, InvalidConfiguration> {
        config.validate()?;

        let w = config.surface_width + 1.0;
        let h = config.surface_height + 1.0;
        let segments = (w / f64::from(config.triangles_per_row)).floor().max(1.0);
        let triangle_side = w / segments;
        let column_width = 3.0_f64.sqrt() * triangle_side / 2.0;

        let columns = round_up_even((config.surface_width / column_width).ceil() + COLUMN_MARGIN);
        let rows = round_up_even((h / triangle_side * 2.0).ceil() + 1.0);
        let (Some(columns), Some(rows)) = (extent_to_u32(columns), extent_to_u32(rows)) else {
            return Err(config_error(config));
        };
        let Ok(cell_count) = usize::try_from(u64::from(columns) * u64::from(rows)) else {
            return Err(config_error(config));
        };

        let mut grid = Self {
            config: *config,
            triangle_side,
            column_width,
            columns,
            rows,
            x_offset: config.surface_width / 2.0,
            y_offset: config.surface_height / 2.0,
            grid_offset_x: half_extent(columns),
            grid_offset_y: half_extent(rows),
            points: Vec::new(),
        };

        let mut points = Vec::with_capacity(cell_count);
        for row in 0..rows {
            for column in 0..columns {
                let signed = grid.signed_unchecked(CellCoord::new(column, row));
                points.push(grid.compute_points(signed));
            }
        }
        grid.points = points;
        Ok(grid)
    }

    /// Returns the configuration the grid was built from.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the grid has no cells. A successfully built grid
    /// never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the triangle edge length in pixels.
    #[must_use]
    pub fn triangle_side(&self) -> f64 {
        self.triangle_side
    }

    /// Returns the horizontal pitch between triangle columns (the
    /// altitude of one equilateral triangle).
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Returns the pixel translation applied to every vertex, which
    /// centers the logical origin on the surface.
    #[must_use]
    pub fn pixel_offset(&self) -> (f64, f64) {
        (self.x_offset, self.y_offset)
    }

    /// Returns the pixel polygon of a cell.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside
    ///   `[0, columns) x [0, rows)`.
    pub fn cell_points(&self, cell: CellCoord) -> Result<[Point; 3], OutOfRange> {
        Ok(self.points[self.flat_index(cell)?])
    }

    /// Returns the orientation of a cell.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents.
    pub fn orientation(&self, cell: CellCoord) -> Result<Orientation, OutOfRange> {
        Ok(self.to_signed(cell)?.orientation())
    }

    /// Converts storage coordinates to center-relative coordinates.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents.
    pub fn to_signed(&self, cell: CellCoord) -> Result<SignedCoord, OutOfRange> {
        self.flat_index(cell)?;
        Ok(self.signed_unchecked(cell))
    }

    /// Converts center-relative coordinates back to storage coordinates.
    ///
    /// Returns `None` for coordinates outside the grid.
    #[must_use]
    pub fn from_signed(&self, signed: SignedCoord) -> Option<CellCoord> {
        let column = u32::try_from(signed.column.checked_add(self.grid_offset_x)?).ok()?;
        let row = u32::try_from(signed.row.checked_add(self.grid_offset_y)?).ok()?;
        (column < self.columns && row < self.rows).then_some(CellCoord::new(column, row))
    }

    /// Iterates all cells with their polygons, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, &[Point; 3])> + '_ {
        let columns = self.columns;
        self.points.iter().enumerate().map(move |(i, tri)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "the cell count is checked to fit at build time"
            )]
            let i = i as u32;
            (CellCoord::new(i % columns, i / columns), tri)
        })
    }

    /// Flat row-major position of a cell, bounds-checked.
    ///
    /// Wrappers that keep per-cell state in a parallel table of length
    /// [`len`](Self::len) can use this as their index.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside
    ///   `[0, columns) x [0, rows)`.
    pub fn flat_index(&self, cell: CellCoord) -> Result<usize, OutOfRange> {
        if cell.column < self.columns && cell.row < self.rows {
            Ok(cell.row as usize * self.columns as usize + cell.column as usize)
        } else {
            Err(OutOfRange {
                column: cell.column,
                row: cell.row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    pub(crate) fn signed_unchecked(&self, cell: CellCoord) -> SignedCoord {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "extents are far below i32::MAX by construction"
        )]
        SignedCoord::new(
            cell.column as i32 - self.grid_offset_x,
            cell.row as i32 - self.grid_offset_y,
        )
    }

    /// Maps a lattice point to truncated pixel coordinates.
    ///
    /// All vertex positions flow through here so shared vertices are
    /// computed identically.
    pub(crate) fn lattice_point(&self, i: i32, j: i32) -> Point {
        Point::new(
            (f64::from(i) * self.column_width + self.x_offset).trunc(),
            (f64::from(j) * (self.triangle_side / 2.0) + self.y_offset).trunc(),
        )
    }

    fn compute_points(&self, cell: SignedCoord) -> [Point; 3] {
        let lc = cell.column;
        // The cell's vertical span starts half a side above its row line.
        let j0 = cell.row - 1;
        match cell.orientation() {
            Orientation::Upright => [
                self.lattice_point(lc, j0),
                self.lattice_point(lc, j0 + 2),
                self.lattice_point(lc + 1, j0 + 1),
            ],
            Orientation::Inverted => [
                self.lattice_point(lc + 1, j0),
                self.lattice_point(lc + 1, j0 + 2),
                self.lattice_point(lc, j0 + 1),
            ],
        }
    }
}

/// Returns the centroid of a triangle.
#[must_use]
pub fn triangle_centroid(points: &[Point; 3]) -> Point {
    Point::new(
        (points[0].x + points[1].x + points[2].x) / 3.0,
        (points[0].y + points[1].y + points[2].y) / 3.0,
    )
}

fn round_up_even(v: f64) -> f64 {
    let v = v.max(2.0);
    if (v / 2.0).fract() == 0.0 { v } else { v + 1.0 }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is checked to be a small positive integer first"
)]
fn extent_to_u32(v: f64) -> Option<u32> {
    (v.is_finite() && v >= 2.0 && v <= f64::from(u32::MAX)).then_some(v as u32)
}

#[allow(
    clippy::cast_possible_wrap,
    reason = "extents are far below i32::MAX in any tileable configuration"
)]
fn half_extent(extent: u32) -> i32 {
    (extent / 2) as i32
}

fn config_error(config: &GridConfig) -> InvalidConfiguration {
    InvalidConfiguration {
        surface_width: config.surface_width,
        surface_height: config.surface_height,
        triangles_per_row: config.triangles_per_row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn grid(width: f64, height: f64, tpr: u32) -> TriGrid {
        TriGrid::build(&GridConfig::new(width, height).with_triangles_per_row(tpr)).unwrap()
    }

    #[test]
    fn build_is_deterministic() {
        let a = grid(800.0, 600.0, 50);
        let b = grid(800.0, 600.0, 50);
        assert_eq!(a.columns(), b.columns());
        assert_eq!(a.rows(), b.rows());
        let va: Vec<_> = a.cells().map(|(_, tri)| *tri).collect();
        let vb: Vec<_> = b.cells().map(|(_, tri)| *tri).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn side_divides_inclusive_width() {
        let g = grid(800.0, 600.0, 50);
        let segments = 801.0 / g.triangle_side();
        assert!(
            (segments - segments.round()).abs() < 1e-9,
            "side must divide width+1 evenly, got {segments} segments"
        );
        assert!((g.column_width() - 3.0_f64.sqrt() * g.triangle_side() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn extents_are_even_and_centered() {
        for (w, h, tpr) in [(800.0, 600.0, 50), (101.0, 101.0, 2), (37.0, 11.0, 5)] {
            let g = grid(w, h, tpr);
            assert_eq!(g.columns() % 2, 0, "columns must be even");
            assert_eq!(g.rows() % 2, 0, "rows must be even");
            // The signed origin is a valid cell at the grid's midpoint.
            let origin = g.from_signed(SignedCoord::new(0, 0)).unwrap();
            assert_eq!(origin, CellCoord::new(g.columns() / 2, g.rows() / 2));
        }
    }

    #[test]
    fn grid_covers_surface_extent() {
        let g = grid(800.0, 600.0, 50);
        // Horizontal span of all column bands must reach both surface edges.
        let left = g.lattice_point(-g.grid_offset_x, 0).x;
        let right = g.lattice_point(g.columns() as i32 - g.grid_offset_x, 0).x;
        assert!(left <= 0.0, "grid must overhang the left edge, got {left}");
        assert!(right >= 800.0, "grid must reach the right edge, got {right}");
        // Vertical span likewise, including the half-step overhang.
        let top = g.lattice_point(0, -g.grid_offset_y - 1).y;
        let bottom = g.lattice_point(0, g.rows() as i32 - g.grid_offset_y).y;
        assert!(top <= 0.0, "grid must overhang the top edge, got {top}");
        assert!(bottom >= 600.0, "grid must reach the bottom edge, got {bottom}");
    }

    #[test]
    fn larger_surface_means_more_columns() {
        let narrow = grid(400.0, 300.0, 50);
        let wide = grid(1200.0, 300.0, 50);
        assert!(wide.columns() > narrow.columns());
    }

    #[test]
    fn cell_points_is_bounds_checked() {
        let g = grid(200.0, 200.0, 50);
        assert!(g.cell_points(CellCoord::new(0, 0)).is_ok());
        assert!(
            g.cell_points(CellCoord::new(g.columns() - 1, g.rows() - 1))
                .is_ok()
        );
        let err = g.cell_points(CellCoord::new(g.columns(), 0)).unwrap_err();
        assert_eq!(err.column, g.columns());
        assert!(g.cell_points(CellCoord::new(0, g.rows())).is_err());
    }

    #[test]
    fn signed_round_trip() {
        let g = grid(300.0, 200.0, 30);
        for (cell, _) in g.cells() {
            let signed = g.to_signed(cell).unwrap();
            assert_eq!(g.from_signed(signed), Some(cell));
        }
        assert_eq!(g.from_signed(SignedCoord::new(i32::MIN, 0)), None);
    }

    #[test]
    fn adjacent_cells_share_identical_vertices() {
        let g = grid(101.0, 101.0, 2);
        for (cell, tri) in g.cells() {
            let signed = g.to_signed(cell).unwrap();
            // Neighbors across each of the three edges: above, below, and
            // across the vertical edge (left of an upright cell, right of
            // an inverted one).
            let across = match signed.orientation() {
                Orientation::Upright => SignedCoord::new(signed.column - 1, signed.row),
                Orientation::Inverted => SignedCoord::new(signed.column + 1, signed.row),
            };
            let neighbors = [
                SignedCoord::new(signed.column, signed.row - 1),
                SignedCoord::new(signed.column, signed.row + 1),
                across,
            ];
            for neighbor in neighbors {
                let Some(storage) = g.from_signed(neighbor) else {
                    continue;
                };
                let other = g.cell_points(storage).unwrap();
                let shared = tri
                    .iter()
                    .filter(|p| other.iter().any(|q| q == *p))
                    .count();
                assert_eq!(
                    shared, 2,
                    "cells {signed} and {neighbor} must share one edge"
                );
            }
        }
    }

    #[test]
    fn vertex_table_is_immutable_by_value() {
        let g = grid(100.0, 100.0, 10);
        let before = g.cell_points(CellCoord::new(1, 1)).unwrap();
        let mut copy = before;
        copy[0].x += 1.0;
        assert_eq!(g.cell_points(CellCoord::new(1, 1)).unwrap(), before);
    }

    #[test]
    fn centroid_of_right_triangle() {
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        assert_eq!(triangle_centroid(&tri), Point::new(1.0, 1.0));
    }
}
