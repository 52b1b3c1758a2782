// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell addressing: storage and center-relative coordinates.

use core::fmt;

/// Storage coordinates of a cell: zero-based `(column, row)`.
///
/// Valid coordinates satisfy `column < columns` and `row < rows` for the
/// grid they address. Storage coordinates index the vertex table
/// directly; use [`TriGrid::to_signed`](crate::TriGrid::to_signed) for
/// the center-relative view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column index, `0 <= column < columns`.
    pub column: u32,
    /// Row index, `0 <= row < rows`.
    pub row: u32,
}

impl CellCoord {
    /// Creates a storage coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Center-relative cell coordinates.
///
/// The logical origin sits at the surface center; columns grow to the
/// right and rows grow downward, so cells left of or above the center
/// have negative coordinates. The cell's [`Orientation`] is a pure
/// function of these coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignedCoord {
    /// Signed column index relative to the surface center.
    pub column: i32,
    /// Signed row index relative to the surface center.
    pub row: i32,
}

impl SignedCoord {
    /// Creates a center-relative coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns the orientation of the triangle at this coordinate.
    ///
    /// Adjacent cells along a column alternate orientation; this parity
    /// rule is what produces the gap-free tiling.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        if (self.column + self.row).rem_euclid(2) == 1 {
            Orientation::Upright
        } else {
            Orientation::Inverted
        }
    }
}

impl fmt::Display for SignedCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The two triangle orientations that alternate across the tiling.
///
/// An upright triangle has its vertical edge on the left of its column
/// band and its apex on the right; an inverted triangle mirrors it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vertical edge left, apex right.
    Upright,
    /// Vertical edge right, apex left.
    Inverted,
}
