// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::estimators::approaches::discrete::binning::{Binning, Histogram};
use crate::estimators::traits::GlobalValue;

/// Distance between two bin representative values.
///
/// Must be symmetric, non-negative and zero on the diagonal for Rao's Q to
/// vanish exactly on degenerate samples.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaoDistance {
    /// |a - b|
    #[default]
    Absolute,
    /// (a - b)²
    Squared,
    /// Caller-supplied distance; not expressible in configuration files.
    #[serde(skip)]
    Custom(fn(f64, f64) -> f64),
}

impl RaoDistance {
    pub fn distance(&self, a: f64, b: f64) -> f64 {
        match self {
            RaoDistance::Absolute => (a - b).abs(),
            RaoDistance::Squared => (a - b) * (a - b),
            RaoDistance::Custom(f) => f(a, b),
        }
    }
}

/// Rao's quadratic entropy Q = Σ_i Σ_j p_i p_j d(c_i, c_j) over bin centers c.
pub struct RaoQuadraticEntropy {
    histogram: Histogram,
    binning: Binning,
    distance: RaoDistance,
}

impl RaoQuadraticEntropy {
    pub fn new(sample: &[f64], binning: &Binning, distance: RaoDistance) -> Self {
        Self::from_histogram(Histogram::from_sample(sample, binning), *binning, distance)
    }

    pub fn from_histogram(histogram: Histogram, binning: Binning, distance: RaoDistance) -> Self {
        Self {
            histogram,
            binning,
            distance,
        }
    }
}

impl GlobalValue for RaoQuadraticEntropy {
    fn global_value(&self) -> f64 {
        rao_q(&self.histogram, &self.binning, &self.distance)
    }
}

pub(crate) fn rao_q(histogram: &Histogram, binning: &Binning, distance: &RaoDistance) -> f64 {
    if histogram.is_degenerate() {
        return 0.0;
    }
    let populated: Vec<(f64, f64)> = histogram
        .probabilities()
        .map(|(i, p)| (binning.center(i), p))
        .collect();
    let mut q = 0.0_f64;
    for &(ci, pi) in &populated {
        for &(cj, pj) in &populated {
            q += pi * pj * distance.distance(ci, cj);
        }
    }
    q.max(0.0)
}
