// Copyright 2026 the Tritile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid construction parameters.

use crate::error::InvalidConfiguration;

/// Default density knob: one triangle column per ~50 surface pixels.
pub const DEFAULT_TRIANGLES_PER_ROW: u32 = 50;

/// Construction parameters for a [`TriGrid`](crate::TriGrid).
///
/// `triangles_per_row` is the only knob besides the surface dimensions;
/// no other option affects geometry. It controls density: the builder
/// picks a triangle side length close to this many pixels such that the
/// side divides the (inclusive) surface width into a whole number of
/// triangle columns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Surface width in pixels. Must be positive and finite.
    pub surface_width: f64,
    /// Surface height in pixels. Must be positive and finite.
    pub surface_height: f64,
    /// Density knob. Must be at least 1.
    pub triangles_per_row: u32,
}

impl GridConfig {
    /// Creates a configuration with the default density.
    #[must_use]
    pub const fn new(surface_width: f64, surface_height: f64) -> Self {
        Self {
            surface_width,
            surface_height,
            triangles_per_row: DEFAULT_TRIANGLES_PER_ROW,
        }
    }

    /// Returns the configuration with a different density knob.
    #[must_use]
    pub const fn with_triangles_per_row(mut self, triangles_per_row: u32) -> Self {
        self.triangles_per_row = triangles_per_row;
        self
    }

    /// Checks that this configuration can produce a valid tiling.
    ///
    /// # Errors
    ///
    /// - [`InvalidConfiguration`]: Returned when either surface dimension
    ///   is not a positive finite number or the density is zero.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        let dims_ok = self.surface_width.is_finite()
            && self.surface_height.is_finite()
            && self.surface_width > 0.0
            && self.surface_height > 0.0;
        if dims_ok && self.triangles_per_row >= 1 {
            Ok(())
        } else {
            Err(InvalidConfiguration {
                surface_width: self.surface_width,
                surface_height: self.surface_height,
                triangles_per_row: self.triangles_per_row,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_dimensions() {
        assert!(GridConfig::new(800.0, 600.0).validate().is_ok());
        assert!(
            GridConfig::new(1.0, 1.0)
                .with_triangles_per_row(1)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(GridConfig::new(0.0, 600.0).validate().is_err());
        assert!(GridConfig::new(800.0, -1.0).validate().is_err());
        assert!(GridConfig::new(f64::NAN, 600.0).validate().is_err());
        assert!(GridConfig::new(f64::INFINITY, 600.0).validate().is_err());
    }

    #[test]
    fn rejects_zero_density() {
        let err = GridConfig::new(800.0, 600.0)
            .with_triangles_per_row(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.triangles_per_row, 0);
    }
}
