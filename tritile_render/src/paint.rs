// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell paint state and the dirty-draining render pass.

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use kurbo::Point;
use peniko::Color;
use tritile_grid::{CellCoord, OutOfRange, TriGrid, triangle_centroid};

use crate::policy::ColorPolicy;
use crate::surface::PaintSurface;

/// Mutable paint state of one cell.
#[derive(Copy, Clone, Debug)]
struct CellState {
    dirty: bool,
    color: Color,
}

impl CellState {
    const CLEAN: Self = Self {
        dirty: false,
        color: Color::TRANSPARENT,
    };
}

/// A [`TriGrid`] wrapped with per-cell dirty flags and colors.
///
/// The grid's vertex table stays immutable; `PaintGrid` owns the
/// parallel mutable table and an ordered pending list of marked cells,
/// so a render pass costs time proportional to the dirty-set size
/// rather than the grid size. Cell state is owned exclusively by this
/// type: external code mutates it only through [`mark_dirty`],
/// [`set_color`], and friends, which keeps the mark/render round-trip
/// well defined (each marked cell is drawn and cleared exactly once).
///
/// [`mark_dirty`]: PaintGrid::mark_dirty
/// [`set_color`]: PaintGrid::set_color
#[derive(Clone, Debug)]
pub struct PaintGrid {
    grid: TriGrid,
    cells: Vec<CellState>,
    /// Flat indices of cells whose dirty flag is set. The flag itself
    /// dedupes; the list gives the render pass its iteration set.
    pending: Vec<usize>,
}

impl PaintGrid {
    /// Wraps a grid with all-clean, transparent cells.
    #[must_use]
    pub fn new(grid: TriGrid) -> Self {
        let cells = vec![CellState::CLEAN; grid.len()];
        Self {
            grid,
            cells,
            pending: Vec::new(),
        }
    }

    /// Returns the wrapped grid.
    #[must_use]
    pub fn grid(&self) -> &TriGrid {
        &self.grid
    }

    /// Releases the wrapped grid, discarding all paint state.
    #[must_use]
    pub fn into_grid(self) -> TriGrid {
        self.grid
    }

    /// Marks a cell as needing redraw on the next render pass.
    ///
    /// Side-effect only: nothing is drawn until [`render`] runs. Marking
    /// an already-dirty cell is a no-op.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents.
    ///
    /// [`render`]: PaintGrid::render
    pub fn mark_dirty(&mut self, cell: CellCoord) -> Result<(), OutOfRange> {
        let index = self.grid.flat_index(cell)?;
        let state = &mut self.cells[index];
        if !state.dirty {
            state.dirty = true;
            self.pending.push(index);
        }
        Ok(())
    }

    /// Marks the cell enclosing a pixel position, if any.
    ///
    /// This composes [`TriGrid::cell_at`] with [`mark_dirty`] for
    /// pointer-event wiring. Positions outside the grid mark nothing and
    /// return `None`.
    ///
    /// [`mark_dirty`]: PaintGrid::mark_dirty
    pub fn mark_dirty_at(&mut self, position: Point) -> Option<CellCoord> {
        let cell = self.grid.cell_at(position)?;
        self.mark_dirty(cell).ok()?;
        Some(cell)
    }

    /// Assigns a cell's color from a policy, then marks it dirty.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents; the policy is not consulted in that case.
    pub fn mark_dirty_with(
        &mut self,
        cell: CellCoord,
        policy: &mut impl ColorPolicy,
    ) -> Result<(), OutOfRange> {
        let index = self.grid.flat_index(cell)?;
        self.cells[index].color = policy.color_for(cell);
        self.mark_dirty(cell)
    }

    /// Sets a cell's color without touching its dirty flag.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents.
    pub fn set_color(&mut self, cell: CellCoord, color: Color) -> Result<(), OutOfRange> {
        let index = self.grid.flat_index(cell)?;
        self.cells[index].color = color;
        Ok(())
    }

    /// Returns a cell's current color.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents.
    pub fn color(&self, cell: CellCoord) -> Result<Color, OutOfRange> {
        Ok(self.cells[self.grid.flat_index(cell)?].color)
    }

    /// Returns whether a cell is waiting to be redrawn.
    ///
    /// # Errors
    ///
    /// - [`OutOfRange`]: Returned when the coordinates fall outside the
    ///   grid extents.
    pub fn is_dirty(&self, cell: CellCoord) -> Result<bool, OutOfRange> {
        Ok(self.cells[self.grid.flat_index(cell)?].dirty)
    }

    /// Returns the number of cells currently marked dirty.
    #[must_use]
    pub fn dirty_len(&self) -> usize {
        self.pending.len()
    }

    /// Repaints exactly the dirty cells and clears their flags.
    ///
    /// Dirty cells are drawn in row-major order (deterministic across
    /// passes), each with one [`PaintSurface::fill_triangle`] call
    /// followed by the label hook. Clean cells are untouched: no redraw,
    /// no overdraw. With no dirty cells this performs zero draw calls.
    ///
    /// Returns the number of cells drawn.
    pub fn render(&mut self, surface: &mut impl PaintSurface) -> usize {
        let mut pending = mem::take(&mut self.pending);
        pending.sort_unstable();
        for &index in &pending {
            let state = &mut self.cells[index];
            state.dirty = false;
            let color = state.color;
            let cell = self.cell_for_index(index);
            // The pending list only ever holds indices minted by the
            // grid, so both lookups are in range.
            let Ok(points) = self.grid.cell_points(cell) else {
                continue;
            };
            let Ok(signed) = self.grid.to_signed(cell) else {
                continue;
            };
            surface.fill_triangle(points, color);
            surface.label_cell(triangle_centroid(&points), signed);
        }
        let drawn = pending.len();
        pending.clear();
        // Hand the allocation back for the next frame.
        self.pending = pending;
        drawn
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "cell indices fit in u32 by grid construction"
    )]
    fn cell_for_index(&self, index: usize) -> CellCoord {
        let columns = self.grid.columns() as usize;
        CellCoord::new((index % columns) as u32, (index / columns) as u32)
    }
}
