// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::engines::EntropyEngine;
use crate::raster::window::Geometry;

/// Per-pixel temporal entropy over the valid values of all available dates.
pub fn temporal_entropy(engine: &EntropyEngine<'_>) -> Array2<f64> {
    engine.evaluate_grid(Geometry::Temporal)
}
