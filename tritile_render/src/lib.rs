// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tritile Render: dirty-tracked repainting for triangular grids.
//!
//! This crate wraps an immutable [`tritile_grid::TriGrid`] with the
//! mutable per-cell paint state of a frame loop:
//!
//! - **Paint grid** ([`PaintGrid`]): per-cell dirty flag and color,
//!   bounds-checked marking, and a render pass that repaints exactly the
//!   dirty cells.
//! - **Paint surface** ([`PaintSurface`]): the consumed draw capability.
//!   The renderer never touches a drawing surface directly; it invokes
//!   this trait once per dirty cell. Closures taking `([Point; 3],
//!   Color)` implement it out of the box.
//! - **Color policies** ([`ColorPolicy`], [`SolidPolicy`],
//!   [`HashedHuePolicy`]): pluggable strategies for assigning cell
//!   colors before marking, kept out of the render loop itself.
//!
//! Render cost is proportional to the number of dirty cells, not the
//! grid size: clean cells are never visited, and a render pass with no
//! marks performs zero draw calls. Dirty cells are drawn in row-major
//! order, so overlay/label layering is reproducible frame to frame.
//!
//! The model is single-threaded and cooperative: an external driver
//! calls [`PaintGrid::render`] once per frame/tick, and marking may
//! happen at any point between renders. Do not call `render` reentrantly
//! from inside a [`PaintSurface`] callback.
//!
//! ## Quick start
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use tritile_grid::{GridConfig, TriGrid};
//! use tritile_render::PaintGrid;
//!
//! let grid = TriGrid::build(&GridConfig::new(400.0, 300.0)).unwrap();
//! let mut paint = PaintGrid::new(grid);
//!
//! // Translate a pointer position into a dirty mark.
//! let cell = paint.mark_dirty_at(Point::new(200.0, 150.0)).unwrap();
//! paint.set_color(cell, Color::from_rgba8(200, 80, 80, 255)).unwrap();
//!
//! // Repaint exactly the dirty cells.
//! let mut drawn = 0;
//! let count = paint.render(&mut |_points: [Point; 3], _color: Color| drawn += 1);
//! assert_eq!((count, drawn), (1, 1));
//!
//! // A second pass without new marks is a no-op.
//! assert_eq!(paint.render(&mut |_: [Point; 3], _: Color| drawn += 1), 0);
//! ```

#![no_std]

extern crate alloc;

mod paint;
mod policy;
mod surface;

pub use paint::PaintGrid;
pub use policy::{ColorPolicy, HashedHuePolicy, SolidPolicy};
pub use surface::PaintSurface;
