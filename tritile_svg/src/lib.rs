// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface for Tritile.
//!
//! This crate provides a small [`PaintSurface`] implementation that
//! records every triangle fill (and optional cell label) as SVG markup
//! and can export the result as a standalone document.
//!
//! This is intended for debugging/inspection and golden tests, not
//! pixel-perfect rendering:
//! - Triangles become `<polygon>` elements with their cell color; fully
//!   transparent fills are still emitted, so the document mirrors the
//!   render pass draw for draw.
//! - Labels become `<text>` elements anchored at the triangle centroid.
//!
//! ```rust
//! use kurbo::Point;
//! use tritile_grid::{GridConfig, TriGrid};
//! use tritile_render::{HashedHuePolicy, PaintGrid};
//! use tritile_svg::SvgSurface;
//!
//! let grid = TriGrid::build(&GridConfig::new(200.0, 200.0)).unwrap();
//! let mut paint = PaintGrid::new(grid);
//! let mut policy = HashedHuePolicy::default();
//!
//! let cell = paint.grid().cell_at(Point::new(100.0, 100.0)).unwrap();
//! paint.mark_dirty_with(cell, &mut policy).unwrap();
//!
//! let mut svg = SvgSurface::new(200.0, 200.0);
//! paint.render(&mut svg);
//! let document = svg.finish();
//! assert!(document.contains("<polygon"));
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use peniko::Color;
use tritile_grid::SignedCoord;
use tritile_render::PaintSurface;

/// A [`PaintSurface`] that accumulates SVG markup.
///
/// Draw calls append to an internal buffer in arrival order, so the
/// exported document reproduces the render pass exactly. The surface
/// can be reused across multiple render passes; [`finish`](Self::finish)
/// consumes it and wraps the accumulated body in an `<svg>` root sized
/// to the surface.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    labels: bool,
    body: String,
    fills: usize,
}

impl SvgSurface {
    /// Creates an empty surface of the given pixel dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            labels: false,
            body: String::new(),
            fills: 0,
        }
    }

    /// Enables `<text>` output for cell labels.
    ///
    /// Labels are off by default; most hosts only want the polygons.
    #[must_use]
    pub fn with_labels(mut self) -> Self {
        self.labels = true;
        self
    }

    /// Returns the number of triangles recorded so far.
    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.fills
    }

    /// Consumes the surface and returns the SVG document.
    #[must_use]
    pub fn finish(self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">",
            fmt_px(self.width),
            fmt_px(self.height),
            fmt_px(self.width),
            fmt_px(self.height),
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl PaintSurface for SvgSurface {
    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        let (rgb, opacity) = color_to_svg(color);
        let _ = write!(
            self.body,
            "<polygon points=\"{} {},{} {},{} {}\" fill=\"{rgb}\"",
            fmt_px(points[0].x),
            fmt_px(points[0].y),
            fmt_px(points[1].x),
            fmt_px(points[1].y),
            fmt_px(points[2].x),
            fmt_px(points[2].y),
        );
        if opacity < 1.0 {
            let _ = write!(self.body, " fill-opacity=\"{}\"", fmt_px(f64::from(opacity)));
        }
        self.body.push_str("/>\n");
        self.fills += 1;
    }

    fn label_cell(&mut self, anchor: Point, cell: SignedCoord) {
        if !self.labels {
            return;
        }
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"8\" text-anchor=\"middle\">{},{}</text>",
            fmt_px(anchor.x),
            fmt_px(anchor.y),
            cell.column,
            cell.row,
        );
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let opacity = f32::from(rgba.a) / 255.0;
    (
        alloc::format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        opacity,
    )
}

/// Formats a pixel scalar compactly: integers without a fraction,
/// everything else with up to three trimmed decimals.
fn fmt_px(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        return alloc::format!("{v:.0}");
    }
    let mut s = alloc::format!("{v:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use tritile_grid::{CellCoord, GridConfig, TriGrid};
    use tritile_render::PaintGrid;

    fn paint_grid() -> PaintGrid {
        let grid = TriGrid::build(&GridConfig::new(120.0, 90.0).with_triangles_per_row(30))
            .unwrap();
        PaintGrid::new(grid)
    }

    #[test]
    fn empty_render_exports_empty_document() {
        let mut paint = paint_grid();
        let mut svg = SvgSurface::new(120.0, 90.0);
        assert_eq!(paint.render(&mut svg), 0);
        assert_eq!(svg.fill_count(), 0);
        let doc = svg.finish();
        assert!(doc.starts_with("<svg"));
        assert!(!doc.contains("<polygon"));
    }

    #[test]
    fn one_polygon_per_dirty_cell() {
        let mut paint = paint_grid();
        let red = Color::from_rgba8(255, 0, 0, 255);
        for cell in [CellCoord::new(0, 0), CellCoord::new(1, 2)] {
            paint.set_color(cell, red).unwrap();
            paint.mark_dirty(cell).unwrap();
        }

        let mut svg = SvgSurface::new(120.0, 90.0);
        assert_eq!(paint.render(&mut svg), 2);
        assert_eq!(svg.fill_count(), 2);

        let doc = svg.finish();
        assert_eq!(doc.matches("<polygon").count(), 2);
        assert!(doc.contains("fill=\"#ff0000\""));
    }

    #[test]
    fn transparent_fills_are_still_emitted() {
        let mut paint = paint_grid();
        paint.mark_dirty(CellCoord::new(2, 2)).unwrap();

        let mut svg = SvgSurface::new(120.0, 90.0);
        paint.render(&mut svg);
        let doc = svg.finish();
        assert_eq!(doc.matches("<polygon").count(), 1);
        assert!(doc.contains("fill-opacity=\"0\""));
    }

    #[test]
    fn labels_are_opt_in() {
        let mut paint = paint_grid();
        paint.mark_dirty(CellCoord::new(1, 1)).unwrap();
        let mut plain = SvgSurface::new(120.0, 90.0);
        paint.render(&mut plain);
        assert!(!plain.finish().contains("<text"));

        paint.mark_dirty(CellCoord::new(1, 1)).unwrap();
        let mut labeled = SvgSurface::new(120.0, 90.0).with_labels();
        paint.render(&mut labeled);
        let doc = labeled.finish();
        assert_eq!(doc.matches("<text").count(), 1);
    }

    #[test]
    fn scalar_formatting_is_compact() {
        assert_eq!(fmt_px(120.0), "120");
        assert_eq!(fmt_px(-3.0), "-3");
        assert_eq!(fmt_px(2.5), "2.5");
        assert_eq!(fmt_px(0.125), "0.125");
        assert_eq!(fmt_px(1.0 / 3.0), "0.333");
    }
}
