// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for grid construction and cell addressing.

use core::fmt;

/// Error returned when geometry parameters cannot produce a valid tiling.
///
/// This is raised at construction time only (see [`TriGrid::build`]) and is
/// not recoverable: the caller must fix the configuration and rebuild.
///
/// [`TriGrid::build`]: crate::TriGrid::build
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidConfiguration {
    /// The rejected surface width in pixels.
    pub surface_width: f64,
    /// The rejected surface height in pixels.
    pub surface_height: f64,
    /// The rejected density knob.
    pub triangles_per_row: u32,
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot tile a {}x{} surface with triangles_per_row = {}",
            self.surface_width, self.surface_height, self.triangles_per_row
        )
    }
}

impl core::error::Error for InvalidConfiguration {}

/// Error returned when an operation addresses a cell outside the grid.
///
/// Valid storage coordinates are `[0, columns) x [0, rows)`. This error
/// signals a caller bug (typically unvalidated input translation), not a
/// transient condition; there is nothing to retry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// The offending column.
    pub column: u32,
    /// The offending row.
    pub row: u32,
    /// Number of columns in the grid.
    pub columns: u32,
    /// Number of rows in the grid.
    pub rows: u32,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}) is outside the {}x{} grid",
            self.column, self.row, self.columns, self.rows
        )
    }
}

impl core::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        let bad = InvalidConfiguration {
            surface_width: 0.0,
            surface_height: 100.0,
            triangles_per_row: 50,
        };
        assert!(bad.to_string().contains("0x100"));

        let oob = OutOfRange {
            column: 7,
            row: 0,
            columns: 6,
            rows: 12,
        };
        assert_eq!(oob.to_string(), "cell (7, 0) is outside the 6x12 grid");
    }
}
