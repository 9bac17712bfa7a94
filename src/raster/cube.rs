// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use ndarray::{Array3, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Affine transformation coefficients, GDAL order
/// `[origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height]`.
///
/// Carried through untouched; nothing in this crate interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform(pub [f64; 6]);

impl Default for GeoTransform {
    fn default() -> Self {
        GeoTransform([0.0, 1.0, 0.0, 0.0, 0.0, -1.0])
    }
}

/// Georeferencing of a cube: transform and CRS definition (e.g. `EPSG:4326`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatialMetadata {
    pub transform: GeoTransform,
    pub crs: Option<String>,
}

/// Time series of vegetation-index grids, shape `(T, H, W)`, one date tag per band.
#[derive(Debug, Clone)]
pub struct RasterCube {
    data: Array3<f64>,
    dates: Vec<NaiveDate>,
    metadata: SpatialMetadata,
}

impl RasterCube {
    pub fn new(data: Array3<f64>, dates: Vec<NaiveDate>, metadata: SpatialMetadata) -> Result<Self> {
        let (t, h, w) = data.dim();
        if t == 0 || h == 0 || w == 0 {
            return Err(Error::EmptyCube);
        }
        if dates.len() != t {
            return Err(Error::DateCountMismatch {
                dates: dates.len(),
                bands: t,
            });
        }
        Ok(Self {
            data,
            dates,
            metadata,
        })
    }

    /// Build from equally-shaped per-date grids.
    pub fn from_bands(
        bands: &[ArrayView2<'_, f64>],
        dates: Vec<NaiveDate>,
        metadata: SpatialMetadata,
    ) -> Result<Self> {
        let first = bands.first().ok_or(Error::EmptyCube)?;
        let (h, w) = first.dim();
        for band in bands {
            if band.dim() != (h, w) {
                return Err(Error::ShapeMismatch {
                    expected: vec![h, w],
                    actual: vec![band.nrows(), band.ncols()],
                });
            }
        }
        let data = ndarray::stack(ndarray::Axis(0), bands).map_err(|_| Error::ShapeMismatch {
            expected: vec![bands.len(), h, w],
            actual: vec![],
        })?;
        Self::new(data, dates, metadata)
    }

    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn metadata(&self) -> &SpatialMetadata {
        &self.metadata
    }

    pub fn n_dates(&self) -> usize {
        self.data.dim().0
    }

    /// Spatial shape `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        let (_, h, w) = self.data.dim();
        (h, w)
    }

    pub fn band(&self, t: usize) -> ArrayView2<'_, f64> {
        self.data.index_axis(ndarray::Axis(0), t)
    }

    #[inline]
    pub fn value(&self, t: usize, row: usize, col: usize) -> f64 {
        self.data[[t, row, col]]
    }
}
