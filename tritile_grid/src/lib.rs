// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tritile Grid: a triangular tessellation of a rectangular surface.
//!
//! This crate builds a grid of alternating upright/inverted equilateral
//! triangles that exactly tiles a pixel surface, and answers geometry
//! queries about it:
//! - [`TriGrid::build`] computes the tiling parameters and the immutable
//!   pixel polygon for every cell.
//! - [`TriGrid::cell_at`] inverts the mapping, translating a pixel
//!   position (for example a pointer event) into the enclosing cell.
//!
//! It does **not** own any paint state or drawing backend. Callers are
//! expected to:
//! - Keep per-cell mutable state (dirty flags, colors) in a layer above,
//!   such as the `tritile_render` crate.
//! - Supply their own draw capability when repainting cells.
//!
//! Cells are addressed two ways: storage coordinates ([`CellCoord`],
//! zero-based, row-major) index the vertex table, while signed
//! coordinates ([`SignedCoord`]) are relative to the surface center, so
//! the logical origin sits in the middle of the surface. The grid
//! deliberately extends slightly beyond the visible rectangle in every
//! direction so centering offsets never expose an edge gap.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tritile_grid::{GridConfig, TriGrid};
//!
//! let grid = TriGrid::build(&GridConfig::new(800.0, 600.0)).unwrap();
//!
//! // Translate a pointer position into the enclosing cell.
//! let cell = grid.cell_at(Point::new(400.0, 300.0)).unwrap();
//! let triangle = grid.cell_points(cell).unwrap();
//! assert_eq!(triangle.len(), 3);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod coord;
mod error;
mod grid;
mod hit;

pub use config::{DEFAULT_TRIANGLES_PER_ROW, GridConfig};
pub use coord::{CellCoord, Orientation, SignedCoord};
pub use error::{InvalidConfiguration, OutOfRange};
pub use grid::{TriGrid, triangle_centroid};
