// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Window sampling over 1D (temporal), 2D (spatial) and 3D (spatio-temporal) geometries

use crate::error::{Error, Result};
use crate::raster::cube::RasterCube;
use crate::raster::mask::ValidityMask;

/// Side length of a square spatial window: odd and >= 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize(usize);

impl WindowSize {
    pub fn new(size: usize) -> Result<Self> {
        if size < 3 || size % 2 == 0 {
            return Err(Error::InvalidWindowSize { size });
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn radius(&self) -> usize {
        self.0 / 2
    }

    /// Number of cells in one W×W window.
    pub fn area(&self) -> usize {
        self.0 * self.0
    }
}

/// Shape of the neighborhood gathered around a center pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// All available dates at one pixel
    Temporal,
    /// W×W cells of a single date
    Spatial { date: usize },
    /// All available dates × W×W cells
    SpatioTemporal,
}

/// Valid values gathered for one evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Window {
    pub values: Vec<f64>,
    /// Positions inside the window rejected by the mask or holding no data.
    pub excluded: usize,
}

/// Result of sampling one center position.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowOutcome {
    /// The full window does not fit inside the grid.
    OutOfBounds,
    /// Fewer valid values than the minimum.
    Insufficient { valid: usize, required: usize },
    Ready(Window),
}

/// Reads windows from an immutable cube and mask.
pub struct WindowSampler<'a> {
    cube: &'a RasterCube,
    mask: &'a ValidityMask,
    window: WindowSize,
    min_valid_fraction: f64,
    available: Vec<usize>,
}

impl<'a> WindowSampler<'a> {
    pub fn new(
        cube: &'a RasterCube,
        mask: &'a ValidityMask,
        window: WindowSize,
        min_valid_fraction: f64,
    ) -> Result<Self> {
        mask.check_against(cube)?;
        if !(0.0..=1.0).contains(&min_valid_fraction) {
            return Err(Error::invalid_parameter(
                "min_valid_fraction",
                min_valid_fraction,
                "must lie in [0, 1]",
            ));
        }
        Ok(Self {
            cube,
            mask,
            window,
            min_valid_fraction,
            available: mask.available_dates(),
        })
    }

    pub fn cube(&self) -> &RasterCube {
        self.cube
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Length of the complete window for `geometry`, counting available dates only.
    pub fn full_length(&self, geometry: Geometry) -> usize {
        match geometry {
            Geometry::Temporal => self.available.len(),
            Geometry::Spatial { .. } => self.window.area(),
            Geometry::SpatioTemporal => self.available.len() * self.window.area(),
        }
    }

    /// Valid values a window of `full_length` positions needs; never below one.
    pub fn required_valid(&self, full_length: usize) -> usize {
        let required = (self.min_valid_fraction * full_length as f64).ceil() as usize;
        required.max(1)
    }

    pub fn sample(&self, geometry: Geometry, row: usize, col: usize) -> WindowOutcome {
        let (h, w) = self.cube.shape();
        let r = self.window.radius();
        let spatial = !matches!(geometry, Geometry::Temporal);
        if spatial && (row < r || col < r || row + r >= h || col + r >= w) {
            return WindowOutcome::OutOfBounds;
        }

        let full = self.full_length(geometry);
        let mut window = Window {
            values: Vec::with_capacity(full),
            excluded: 0,
        };
        match geometry {
            Geometry::Temporal => {
                for &t in &self.available {
                    self.push(&mut window, t, row, col);
                }
            }
            Geometry::Spatial { date } => self.push_block(&mut window, date, row, col),
            Geometry::SpatioTemporal => {
                for &t in &self.available {
                    self.push_block(&mut window, t, row, col);
                }
            }
        }

        let required = self.required_valid(full);
        if window.values.len() < required {
            WindowOutcome::Insufficient {
                valid: window.values.len(),
                required,
            }
        } else {
            WindowOutcome::Ready(window)
        }
    }

    fn push_block(&self, window: &mut Window, t: usize, row: usize, col: usize) {
        let r = self.window.radius();
        for rr in row - r..=row + r {
            for cc in col - r..=col + r {
                self.push(window, t, rr, cc);
            }
        }
    }

    #[inline]
    fn push(&self, window: &mut Window, t: usize, row: usize, col: usize) {
        let v = self.cube.value(t, row, col);
        if self.mask.is_valid(t, row, col) && v.is_finite() {
            window.values.push(v);
        } else {
            window.excluded += 1;
        }
    }
}
