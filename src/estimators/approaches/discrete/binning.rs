// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on `bins`; every histogram allocates one counter per bin.
pub const MAX_BINS: usize = 1 << 20;

/// Equal-width discretization of index values into `bins` classes over `[min, max]`.
///
/// The range is global: every window of every engine is binned against the same
/// edges so entropies are comparable across pixels and dates. Values below `min`
/// land in the first bin and values at or above `max` in the last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Binning {
    /// Number of bins (k)
    pub bins: usize,
    /// Lower edge of the first bin
    pub min: f64,
    /// Upper edge of the last bin
    pub max: f64,
}

impl Default for Binning {
    /// 200 bins over [-1, 1]: one bin per 0.01 index units.
    fn default() -> Self {
        Self {
            bins: 200,
            min: -1.0,
            max: 1.0,
        }
    }
}

impl Binning {
    pub fn new(bins: usize, min: f64, max: f64) -> Result<Self> {
        let binning = Self { bins, min, max };
        binning.validate()?;
        Ok(binning)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(Error::invalid_parameter("bins", self.bins, "must be >= 1"));
        }
        if self.bins > MAX_BINS {
            return Err(Error::invalid_parameter(
                "bins",
                self.bins,
                format!("must be <= {MAX_BINS}"),
            ));
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::invalid_parameter(
                "binning range",
                format!("[{}, {}]", self.min, self.max),
                "bounds must be finite",
            ));
        }
        if self.min >= self.max {
            return Err(Error::invalid_parameter(
                "binning range",
                format!("[{}, {}]", self.min, self.max),
                "min must be below max",
            ));
        }
        if !(self.max - self.min).is_finite() {
            return Err(Error::invalid_parameter(
                "binning range",
                format!("[{}, {}]", self.min, self.max),
                "range width overflows",
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        (self.max - self.min) / self.bins as f64
    }

    /// Bin index of a finite value, clamped to the outer bins.
    pub fn bin_index(&self, value: f64) -> usize {
        if value <= self.min {
            return 0;
        }
        let idx = ((value - self.min) / self.width()).floor() as usize;
        idx.min(self.bins - 1)
    }

    /// Representative value (center) of bin `idx`.
    pub fn center(&self, idx: usize) -> f64 {
        self.min + (idx as f64 + 0.5) * self.width()
    }
}

/// Dense bin counts for one sample.
///
/// Non-finite values are skipped, so `n` may be smaller than the sample length.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Count per bin, indexed like the binning
    pub counts: Vec<usize>,
    /// Total number of counted observations
    pub n: usize,
    /// Number of bins with a non-zero count
    pub populated: usize,
}

impl Histogram {
    pub fn from_sample(sample: &[f64], binning: &Binning) -> Self {
        let mut counts = vec![0usize; binning.bins];
        let mut n = 0usize;
        for &v in sample.iter().filter(|v| v.is_finite()) {
            counts[binning.bin_index(v)] += 1;
            n += 1;
        }
        let populated = counts.iter().filter(|&&c| c != 0).count();
        Self { counts, n, populated }
    }

    /// True when the sample cannot carry any diversity (size <= 1 or one populated bin).
    pub fn is_degenerate(&self) -> bool {
        self.n <= 1 || self.populated <= 1
    }

    /// `(bin, p_i)` for populated bins only; zero-frequency bins never appear.
    pub fn probabilities(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let n_f = self.n as f64;
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(move |(i, &c)| (i, c as f64 / n_f))
    }
}
