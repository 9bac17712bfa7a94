// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array3, Axis};

use crate::engines::EntropyEngine;
use crate::raster::window::Geometry;

/// Per-date spatial entropy: one W×W window per pixel, one band per date.
///
/// Dates share no state. A date without usable classification comes out as an
/// all-sentinel band.
pub fn spatial_entropy(engine: &EntropyEngine<'_>) -> Array3<f64> {
    let cube = engine.sampler().cube();
    let (rows, cols) = cube.shape();
    let mut stack = Array3::from_elem((cube.n_dates(), rows, cols), engine.sentinel());
    for (date, mut band) in stack.axis_iter_mut(Axis(0)).enumerate() {
        band.assign(&engine.evaluate_grid(Geometry::Spatial { date }));
        log::debug!("Spatial entropy band {} ({}) done", date, cube.dates()[date]);
    }
    stack
}
