// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Land-cover classification layers and their non-natural class codes

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Classification products understood by the masking policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCoverScheme {
    /// Dynamic World `label` band (near-real-time, one layer per date)
    DynamicWorld,
    /// ESA WorldCover `Map` band (static)
    EsaWorldCover,
}

impl LandCoverScheme {
    /// Class codes that never count as natural surface.
    pub fn excluded_classes(&self) -> &'static [i32] {
        match self {
            // water, shrub & scrub, built, bare, snow & ice
            LandCoverScheme::DynamicWorld => &[0, 5, 6, 7, 8],
            // built-up, bare/sparse vegetation, snow & ice, permanent water
            LandCoverScheme::EsaWorldCover => &[50, 60, 70, 80],
        }
    }

    pub fn is_excluded(&self, class: i32) -> bool {
        self.excluded_classes().contains(&class)
    }
}

/// Validity of one classified pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    Natural,
    Excluded,
    /// The layer has no label here.
    Missing,
}

/// A dense label grid aligned to the cube.
#[derive(Debug, Clone)]
pub struct ClassificationLayer {
    pub scheme: LandCoverScheme,
    pub labels: Array2<i32>,
    /// Label marking pixels the product did not classify.
    pub nodata: Option<i32>,
}

impl ClassificationLayer {
    pub fn new(scheme: LandCoverScheme, labels: Array2<i32>) -> Self {
        Self {
            scheme,
            labels,
            nodata: None,
        }
    }

    pub fn with_nodata(mut self, nodata: i32) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn shape(&self) -> (usize, usize) {
        self.labels.dim()
    }

    pub fn classify(&self, row: usize, col: usize) -> PixelClass {
        let label = self.labels[[row, col]];
        if self.nodata == Some(label) {
            PixelClass::Missing
        } else if self.scheme.is_excluded(label) {
            PixelClass::Excluded
        } else {
            PixelClass::Natural
        }
    }

    /// True when at least one pixel is natural surface.
    pub fn has_natural(&self) -> bool {
        let (h, w) = self.shape();
        (0..h).any(|r| (0..w).any(|c| self.classify(r, c) == PixelClass::Natural))
    }
}
