// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulates the cooperative frame loop: a driver marks a handful of
//! cells between ticks, and each render pass repaints exactly those.
//!
//! The marked cells are chosen by a small deterministic generator, so
//! the reported draw counts are reproducible run to run.

use kurbo::Point;
use peniko::Color;
use tritile_grid::{CellCoord, GridConfig, TriGrid};
use tritile_render::{HashedHuePolicy, PaintGrid};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const FRAMES: u32 = 10;
const MARKS_PER_FRAME: u32 = 3;

/// Minimal linear congruential generator for reproducible cell picks.
struct Lcg(u32);

impl Lcg {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.0 >> 8) % bound
    }
}

fn main() {
    let config = GridConfig::new(WIDTH, HEIGHT).with_triangles_per_row(60);
    let grid = TriGrid::build(&config).expect("static demo configuration is valid");
    println!(
        "grid: {}x{} cells, side {:.2}px",
        grid.columns(),
        grid.rows(),
        grid.triangle_side()
    );

    let mut paint = PaintGrid::new(grid);
    let mut policy = HashedHuePolicy::new(7);
    let mut rng = Lcg(42);

    // The pointer parks at the surface center; its cell is remarked
    // every frame on top of the random picks.
    let center = Point::new(WIDTH / 2.0, HEIGHT / 2.0);

    for frame in 0..FRAMES {
        for _ in 0..MARKS_PER_FRAME {
            let cell = CellCoord::new(
                rng.next_below(paint.grid().columns()),
                rng.next_below(paint.grid().rows()),
            );
            paint
                .mark_dirty_with(cell, &mut policy)
                .expect("picked cells are in range");
        }
        let _ = paint.mark_dirty_at(center);

        let mut draws = 0_u32;
        let drawn = paint.render(&mut |_points: [Point; 3], _color: Color| draws += 1);
        println!("frame {frame}: {drawn} cells repainted ({draws} draw calls)");
    }
}
