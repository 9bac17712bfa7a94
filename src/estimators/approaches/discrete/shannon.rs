// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::discrete::binning::{Binning, Histogram};
use crate::estimators::traits::GlobalValue;

/// Shannon entropy of a binned sample using maximum-likelihood probabilities (natural log base).
///
/// Computes H = -Σ p_i ln p_i over populated bins, with p_i = n_i/N.
pub struct ShannonEntropy {
    histogram: Histogram,
}

impl ShannonEntropy {
    pub fn new(sample: &[f64], binning: &Binning) -> Self {
        Self::from_histogram(Histogram::from_sample(sample, binning))
    }

    pub fn from_histogram(histogram: Histogram) -> Self {
        Self { histogram }
    }
}

impl GlobalValue for ShannonEntropy {
    fn global_value(&self) -> f64 {
        shannon_nats(&self.histogram)
    }
}

pub(crate) fn shannon_nats(histogram: &Histogram) -> f64 {
    if histogram.is_degenerate() {
        return 0.0;
    }
    // -sum(p * ln p). Order of iteration doesn't matter for sum.
    let mut h = 0.0_f64;
    for (_, p) in histogram.probabilities() {
        h -= p * p.ln();
    }
    h.max(0.0)
}
