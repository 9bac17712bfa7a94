// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Natural-surface validity mask and the policy deriving it from land cover

use ndarray::{Array2, Array3, Axis};

use crate::error::{Error, Result};
use crate::raster::cube::RasterCube;
use crate::raster::landcover::{ClassificationLayer, PixelClass};

/// Which classification ended up deciding a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSource {
    Primary,
    Fallback,
    /// Neither source covered the date; it is left out of temporal sampling.
    Unavailable,
    /// Mask supplied directly rather than derived.
    Supplied,
}

/// Per-date boolean grid, true where a pixel is a usable natural-surface observation.
#[derive(Debug, Clone)]
pub struct ValidityMask {
    valid: Array3<bool>,
    sources: Vec<MaskSource>,
}

impl ValidityMask {
    /// Every pixel of every date valid.
    pub fn all_valid(n_dates: usize, shape: (usize, usize)) -> Self {
        Self::from_array(Array3::from_elem((n_dates, shape.0, shape.1), true))
    }

    /// One static grid repeated for every date.
    pub fn from_static(grid: &Array2<bool>, n_dates: usize) -> Self {
        let (h, w) = grid.dim();
        let valid = Array3::from_shape_fn((n_dates, h, w), |(_, r, c)| grid[[r, c]]);
        Self::from_array(valid)
    }

    /// Dense `(T, H, W)` mask with every date available.
    pub fn from_array(valid: Array3<bool>) -> Self {
        let n_dates = valid.dim().0;
        Self {
            valid,
            sources: vec![MaskSource::Supplied; n_dates],
        }
    }

    /// Mark date `t` as having no usable classification.
    pub fn mark_unavailable(&mut self, t: usize) {
        self.valid.index_axis_mut(Axis(0), t).fill(false);
        self.sources[t] = MaskSource::Unavailable;
    }

    pub fn dim(&self) -> (usize, usize, usize) {
        self.valid.dim()
    }

    #[inline]
    pub fn is_valid(&self, t: usize, row: usize, col: usize) -> bool {
        self.valid[[t, row, col]]
    }

    pub fn is_available(&self, t: usize) -> bool {
        self.sources[t] != MaskSource::Unavailable
    }

    pub fn source(&self, t: usize) -> MaskSource {
        self.sources[t]
    }

    /// Indices of dates that take part in temporal and spatio-temporal sampling.
    pub fn available_dates(&self) -> Vec<usize> {
        (0..self.sources.len())
            .filter(|&t| self.is_available(t))
            .collect()
    }

    pub fn check_against(&self, cube: &RasterCube) -> Result<()> {
        let (h, w) = cube.shape();
        let expected = (cube.n_dates(), h, w);
        if self.dim() != expected {
            let (mt, mh, mw) = self.dim();
            return Err(Error::ShapeMismatch {
                expected: vec![expected.0, expected.1, expected.2],
                actual: vec![mt, mh, mw],
            });
        }
        Ok(())
    }
}

/// Derives the validity mask from a per-date primary classification with a
/// secondary (usually static) fallback.
#[derive(Debug, Clone)]
pub struct MaskingPolicy {
    /// One entry per date; `None` when the product has no scene for that date.
    pub primary: Vec<Option<ClassificationLayer>>,
    pub fallback: Option<ClassificationLayer>,
    /// Replace a primary layer that marks no pixel natural by the fallback.
    pub fallback_on_empty_primary: bool,
}

impl MaskingPolicy {
    pub fn new(primary: Vec<Option<ClassificationLayer>>, fallback: Option<ClassificationLayer>) -> Self {
        Self {
            primary,
            fallback,
            fallback_on_empty_primary: true,
        }
    }

    /// Compute the mask once for all engines.
    pub fn derive(&self, n_dates: usize, shape: (usize, usize)) -> Result<ValidityMask> {
        if self.primary.len() != n_dates {
            return Err(Error::DateCountMismatch {
                dates: self.primary.len(),
                bands: n_dates,
            });
        }
        let layers = self.primary.iter().flatten().chain(self.fallback.iter());
        for layer in layers {
            if layer.shape() != shape {
                return Err(Error::ShapeMismatch {
                    expected: vec![shape.0, shape.1],
                    actual: vec![layer.labels.nrows(), layer.labels.ncols()],
                });
            }
        }

        let (h, w) = shape;
        let mut valid = Array3::from_elem((n_dates, h, w), false);
        let mut sources = Vec::with_capacity(n_dates);
        for (t, primary) in self.primary.iter().enumerate() {
            let primary = primary
                .as_ref()
                .filter(|p| !(self.fallback_on_empty_primary && self.fallback.is_some() && !p.has_natural()));
            let source = match (primary, self.fallback.as_ref()) {
                (Some(p), fallback) => {
                    let mut band = valid.index_axis_mut(Axis(0), t);
                    for ((r, c), v) in band.indexed_iter_mut() {
                        *v = match p.classify(r, c) {
                            PixelClass::Natural => true,
                            PixelClass::Excluded => false,
                            PixelClass::Missing => fallback
                                .is_some_and(|f| f.classify(r, c) == PixelClass::Natural),
                        };
                    }
                    MaskSource::Primary
                }
                (None, Some(f)) => {
                    let mut band = valid.index_axis_mut(Axis(0), t);
                    for ((r, c), v) in band.indexed_iter_mut() {
                        *v = f.classify(r, c) == PixelClass::Natural;
                    }
                    MaskSource::Fallback
                }
                (None, None) => MaskSource::Unavailable,
            };
            match source {
                MaskSource::Unavailable => {
                    log::warn!("No land-cover classification for date {t}; excluding it from temporal sampling")
                }
                s => log::debug!("Date {t} masked using {s:?} classification"),
            }
            sources.push(source);
        }
        Ok(ValidityMask { valid, sources })
    }
}
