// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draw capability consumed by the render pass.

use kurbo::Point;
use peniko::Color;
use tritile_grid::SignedCoord;

/// A surface that can paint one triangle at a time.
///
/// This is the seam between the dirty-tracked core and the host's actual
/// drawing context: the renderer calls [`fill_triangle`] once per dirty
/// cell per render pass and expects it to complete synchronously. Stroke
/// and fill style beyond the cell color are the implementor's concern.
///
/// The optional [`label_cell`] hook is invoked right after each fill
/// with the cell's center-relative coordinates, for hosts that overlay
/// debugging labels. The default implementation does nothing.
///
/// Closures of shape `FnMut([Point; 3], Color)` implement this trait, so
/// simple hosts and tests do not need a named type.
///
/// [`fill_triangle`]: PaintSurface::fill_triangle
/// [`label_cell`]: PaintSurface::label_cell
pub trait PaintSurface {
    /// Paints one triangle in the given color.
    fn fill_triangle(&mut self, points: [Point; 3], color: Color);

    /// Optionally annotates the cell just painted.
    ///
    /// `anchor` is the triangle's centroid in pixel coordinates.
    fn label_cell(&mut self, anchor: Point, cell: SignedCoord) {
        let _ = (anchor, cell);
    }
}

impl<F> PaintSurface for F
where
    F: FnMut([Point; 3], Color),
{
    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        self(points, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn closures_are_surfaces() {
        let mut seen = Vec::new();
        let mut surface = |points: [Point; 3], color: Color| seen.push((points, color));
        PaintSurface::fill_triangle(
            &mut surface,
            [Point::ZERO, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            Color::TRANSPARENT,
        );
        assert_eq!(seen.len(), 1);
    }
}
