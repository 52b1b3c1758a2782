// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a fully painted tessellation to an SVG document on stdout.
//!
//! ```sh
//! cargo run --bin tessellation_svg > tessellation.svg
//! ```

use tritile_grid::{GridConfig, TriGrid};
use tritile_render::{HashedHuePolicy, PaintGrid};
use tritile_svg::SvgSurface;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() {
    let config = GridConfig::new(WIDTH, HEIGHT).with_triangles_per_row(40);
    let grid = TriGrid::build(&config).expect("static demo configuration is valid");

    let mut paint = PaintGrid::new(grid);
    let mut policy = HashedHuePolicy::new(2026);

    // Paint the whole surface once: mark every cell with its hue.
    let cells: Vec<_> = paint.grid().cells().map(|(cell, _)| cell).collect();
    for cell in cells {
        paint
            .mark_dirty_with(cell, &mut policy)
            .expect("iterated cells are in range");
    }

    let mut svg = SvgSurface::new(WIDTH, HEIGHT);
    paint.render(&mut svg);
    print!("{}", svg.finish());
}
