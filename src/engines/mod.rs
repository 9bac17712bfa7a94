// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entropy engines: one estimator evaluated over every pixel for a given geometry.
//!
//! The spatial, temporal and spatio-temporal products differ only in the
//! [`Geometry`] handed to [`EntropyEngine::evaluate_grid`].

pub mod spatial;
pub mod spatiotemporal;
pub mod temporal;

use ndarray::Array2;

use crate::estimators::EntropyEstimator;
use crate::maybe_rayon::*;
use crate::raster::window::{Geometry, WindowOutcome, WindowSampler};

pub use spatial::spatial_entropy;
pub use spatiotemporal::spatiotemporal_entropy;
pub use temporal::temporal_entropy;

/// Sampler + estimator + sentinel; shared read-only by every worker.
pub struct EntropyEngine<'a> {
    sampler: WindowSampler<'a>,
    estimator: EntropyEstimator,
    sentinel: f64,
}

impl<'a> EntropyEngine<'a> {
    pub fn new(sampler: WindowSampler<'a>, estimator: EntropyEstimator, sentinel: f64) -> Self {
        Self {
            sampler,
            estimator,
            sentinel,
        }
    }

    pub fn sampler(&self) -> &WindowSampler<'a> {
        &self.sampler
    }

    pub fn estimator(&self) -> &EntropyEstimator {
        &self.estimator
    }

    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// Entropy at one position, or the sentinel when the window is incomplete or too sparse.
    pub fn evaluate(&self, geometry: Geometry, row: usize, col: usize) -> f64 {
        match self.sampler.sample(geometry, row, col) {
            WindowOutcome::Ready(window) => self.estimator.estimate(&window.values),
            WindowOutcome::OutOfBounds | WindowOutcome::Insufficient { .. } => self.sentinel,
        }
    }

    /// Evaluate every pixel; rows are independent and written to disjoint cells.
    pub fn evaluate_grid(&self, geometry: Geometry) -> Array2<f64> {
        let (rows, cols) = self.sampler.cube().shape();
        let data: Vec<f64> = (0..rows)
            .into_par_iter()
            .flat_map(|row| {
                (0..cols)
                    .map(|col| self.evaluate(geometry, row, col))
                    .collect::<Vec<f64>>()
            })
            .collect();
        Array2::from_shape_vec((rows, cols), data).expect("one value per cell in row-major order")
    }
}
