// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable color assignment, layered on top of dirty marking.
//!
//! The render pass itself never generates colors; hosts that want a
//! color-per-mark behavior (demo animations, heat maps) supply a policy
//! to [`PaintGrid::mark_dirty_with`](crate::PaintGrid::mark_dirty_with).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use peniko::Color;
use tritile_grid::CellCoord;

/// Strategy for choosing a cell's color at mark time.
pub trait ColorPolicy {
    /// Returns the color to paint the given cell with.
    fn color_for(&mut self, cell: CellCoord) -> Color;
}

/// Paints every cell the same color.
#[derive(Copy, Clone, Debug)]
pub struct SolidPolicy {
    /// The color applied to every marked cell.
    pub color: Color,
}

impl ColorPolicy for SolidPolicy {
    fn color_for(&mut self, _cell: CellCoord) -> Color {
        self.color
    }
}

/// Deterministic pastel hue per cell.
///
/// Each cell gets a stable hue derived from an integer mix of its
/// coordinates and the seed, at 40% saturation and 80% lightness. The
/// same seed always produces the same coloring, so demo animations are
/// reproducible; vary the seed for a different palette roll.
#[derive(Copy, Clone, Debug)]
pub struct HashedHuePolicy {
    seed: u32,
}

impl HashedHuePolicy {
    /// Creates a policy for the given seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn hue(&self, cell: CellCoord) -> f32 {
        // Knuth-style multiplicative mixing of the packed coordinates.
        let packed = cell
            .row
            .wrapping_mul(0x0001_0000)
            .wrapping_add(cell.column)
            .wrapping_add(self.seed);
        let mixed = packed
            .wrapping_mul(2_654_435_761)
            .wrapping_add(374_761_393)
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        (mixed % 360) as f32
    }
}

impl Default for HashedHuePolicy {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ColorPolicy for HashedHuePolicy {
    fn color_for(&mut self, cell: CellCoord) -> Color {
        hsl_color(self.hue(cell), 0.4, 0.8)
    }
}

/// Converts an HSL triple (hue in degrees, saturation and lightness in
/// `0..=1`) to an opaque color.
fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color::new([r + m, g + m, b + m, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_policy_is_constant() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let mut policy = SolidPolicy { color: red };
        assert_eq!(policy.color_for(CellCoord::new(0, 0)), red);
        assert_eq!(policy.color_for(CellCoord::new(9, 3)), red);
    }

    #[test]
    fn hashed_hue_is_stable_per_cell() {
        let mut a = HashedHuePolicy::new(7);
        let mut b = HashedHuePolicy::new(7);
        let cell = CellCoord::new(4, 2);
        assert_eq!(a.color_for(cell), b.color_for(cell));
    }

    #[test]
    fn hashed_hue_varies_with_seed_and_cell() {
        let mut a = HashedHuePolicy::new(1);
        let mut b = HashedHuePolicy::new(2);
        let cell = CellCoord::new(4, 2);
        assert_ne!(a.color_for(cell), b.color_for(cell));
        assert_ne!(a.color_for(cell), a.color_for(CellCoord::new(5, 2)));
    }

    #[test]
    fn hsl_conversion_hits_known_points() {
        // Lightness 0 is black, lightness 1 is white, regardless of hue.
        let black = hsl_color(123.0, 0.4, 0.0).to_rgba8();
        assert_eq!((black.r, black.g, black.b), (0, 0, 0));
        let white = hsl_color(300.0, 0.4, 1.0).to_rgba8();
        assert_eq!((white.r, white.g, white.b), (255, 255, 255));

        // Fully saturated red at half lightness.
        let red = hsl_color(0.0, 1.0, 0.5).to_rgba8();
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    }

    #[test]
    fn pastel_palette_stays_pastel() {
        // 40% saturation / 80% lightness keeps every channel well away
        // from the extremes.
        let mut policy = HashedHuePolicy::default();
        for column in 0..16 {
            for row in 0..16 {
                let rgba = policy.color_for(CellCoord::new(column, row)).to_rgba8();
                for channel in [rgba.r, rgba.g, rgba.b] {
                    assert!((120..=240).contains(&channel), "channel {channel} not pastel");
                }
            }
        }
    }
}
