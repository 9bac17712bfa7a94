// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::engines::EntropyEngine;
use crate::raster::window::Geometry;

/// Per-pixel entropy of the T×W×W block centered on each pixel, flattened into one sample.
///
/// The boundary and minimum-count rules apply to the whole block: a pixel whose
/// W×W footprint leaves the grid, or whose block holds too few valid values
/// across all available dates, gets the sentinel.
pub fn spatiotemporal_entropy(engine: &EntropyEngine<'_>) -> Array2<f64> {
    engine.evaluate_grid(Geometry::SpatioTemporal)
}
