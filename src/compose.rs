// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output composer: orders and labels the entropy products as one band stack

use chrono::NaiveDate;
use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::error::{Error, Result};
use crate::raster::cube::SpatialMetadata;

/// What a band of the output stack holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    Spatial(NaiveDate),
    Temporal,
    SpatioTemporal,
}

/// Label and role of one output band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandDescriptor {
    pub kind: BandKind,
    pub label: String,
}

/// The three entropy products of one run, ready for an external writer.
///
/// Band order: T spatial bands (by date), the temporal band, the spatio-temporal band.
#[derive(Debug, Clone)]
pub struct EntropyMapSet {
    spatial: Array3<f64>,
    temporal: Array2<f64>,
    spatiotemporal: Array2<f64>,
    bands: Vec<BandDescriptor>,
    metadata: SpatialMetadata,
    sentinel: f64,
}

impl EntropyMapSet {
    /// Assemble the products; georeferencing is passed through untouched.
    pub fn compose(
        estimator_label: &str,
        dates: &[NaiveDate],
        spatial: Array3<f64>,
        temporal: Array2<f64>,
        spatiotemporal: Array2<f64>,
        metadata: SpatialMetadata,
        sentinel: f64,
    ) -> Result<Self> {
        let (t, h, w) = spatial.dim();
        if dates.len() != t {
            return Err(Error::DateCountMismatch {
                dates: dates.len(),
                bands: t,
            });
        }
        for band in [&temporal, &spatiotemporal] {
            if band.dim() != (h, w) {
                return Err(Error::ShapeMismatch {
                    expected: vec![h, w],
                    actual: vec![band.nrows(), band.ncols()],
                });
            }
        }

        let mut bands: Vec<BandDescriptor> = dates
            .iter()
            .map(|d| BandDescriptor {
                kind: BandKind::Spatial(*d),
                label: format!("{}_{}", estimator_label, d.format("%Y-%m-%d")),
            })
            .collect();
        bands.push(BandDescriptor {
            kind: BandKind::Temporal,
            label: format!("{estimator_label}_temporal_variability"),
        });
        bands.push(BandDescriptor {
            kind: BandKind::SpatioTemporal,
            label: format!("{estimator_label}_3D_window_entropy"),
        });

        Ok(Self {
            spatial,
            temporal,
            spatiotemporal,
            bands,
            metadata,
            sentinel,
        })
    }

    pub fn spatial(&self) -> &Array3<f64> {
        &self.spatial
    }

    pub fn temporal(&self) -> &Array2<f64> {
        &self.temporal
    }

    pub fn spatiotemporal(&self) -> &Array2<f64> {
        &self.spatiotemporal
    }

    pub fn metadata(&self) -> &SpatialMetadata {
        &self.metadata
    }

    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// True when `value` is the reserved sentinel (NaN-aware).
    pub fn is_sentinel(&self, value: f64) -> bool {
        value.to_bits() == self.sentinel.to_bits() || (self.sentinel.is_nan() && value.is_nan())
    }

    pub fn descriptors(&self) -> &[BandDescriptor] {
        &self.bands
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Spatial shape `(rows, cols)` shared by every band.
    pub fn shape(&self) -> (usize, usize) {
        self.temporal.dim()
    }

    /// Band `i` of the ordered stack.
    pub fn band(&self, i: usize) -> Option<ArrayView2<'_, f64>> {
        let t = self.spatial.dim().0;
        match i {
            i if i < t => Some(self.spatial.index_axis(Axis(0), i)),
            i if i == t => Some(self.temporal.view()),
            i if i == t + 1 => Some(self.spatiotemporal.view()),
            _ => None,
        }
    }

    /// `(label, grid)` pairs in band order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, ArrayView2<'_, f64>)> + '_ {
        self.bands
            .iter()
            .enumerate()
            .filter_map(move |(i, d)| self.band(i).map(|b| (d.label.as_str(), b)))
    }

    /// Contiguous `(T + 2, H, W)` copy of the band stack.
    pub fn to_stack(&self) -> Array3<f64> {
        let views: Vec<ArrayView2<'_, f64>> = self.bands().map(|(_, b)| b).collect();
        ndarray::stack(Axis(0), &views).expect("all bands share the spatial shape")
    }
}
