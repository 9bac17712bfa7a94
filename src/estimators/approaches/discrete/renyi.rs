// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::binning::{Binning, Histogram};
use crate::estimators::approaches::discrete::shannon::shannon_nats;
use crate::estimators::traits::GlobalValue;

/// Orders closer than this to 1 use the Shannon limit instead of the singular general formula.
pub const ALPHA_ONE_TOLERANCE: f64 = 1e-6;

/// Rényi entropy of order α for a binned sample (natural log base).
///
/// H_α = ln(Σ p_i^α) / (1 - α), with the closed forms:
/// - α = 0: Hartley entropy, ln of the number of populated bins
/// - α → 1: Shannon entropy
/// - α = 2: collision entropy, -ln Σ p_i²
/// - α = ∞: min-entropy, -ln max p_i
pub struct RenyiEntropy {
    histogram: Histogram,
    alpha: f64,
}

impl RenyiEntropy {
    pub fn new(sample: &[f64], binning: &Binning, alpha: f64) -> Result<Self> {
        Self::from_histogram(Histogram::from_sample(sample, binning), alpha)
    }

    pub fn from_histogram(histogram: Histogram, alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        Ok(Self { histogram, alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// Accept α in [0, ∞]; NaN and negative orders have no defined limit here.
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha.is_nan() || alpha < 0.0 {
        return Err(Error::invalid_parameter(
            "alpha",
            alpha,
            "Rényi order must be >= 0 (or +inf)",
        ));
    }
    Ok(())
}

impl GlobalValue for RenyiEntropy {
    fn global_value(&self) -> f64 {
        renyi_nats(&self.histogram, self.alpha)
    }
}

pub(crate) fn renyi_nats(histogram: &Histogram, alpha: f64) -> f64 {
    if histogram.is_degenerate() {
        return 0.0;
    }
    if alpha == 0.0 {
        return (histogram.populated as f64).ln();
    }
    if (alpha - 1.0).abs() < ALPHA_ONE_TOLERANCE {
        return shannon_nats(histogram);
    }
    let p_max = histogram
        .probabilities()
        .map(|(_, p)| p)
        .fold(0.0_f64, f64::max);
    let h = if alpha.is_infinite() {
        -p_max.ln()
    } else if alpha == 2.0 {
        let collision: f64 = histogram.probabilities().map(|(_, p)| p * p).sum();
        -collision.ln()
    } else {
        // ln Σ p^α = α ln p_max + ln Σ (p / p_max)^α; the scaled sum is >= 1, so large
        // orders cannot underflow to ln(0).
        let scaled_sum: f64 = histogram
            .probabilities()
            .map(|(_, p)| (p / p_max).powf(alpha))
            .sum();
        (alpha * p_max.ln() + scaled_sum.ln()) / (1.0 - alpha)
    };
    // Rounding can leave a tiny negative value for near-degenerate samples.
    h.max(0.0)
}
