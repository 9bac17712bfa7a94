// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # vegentropy
//!
//! Entropy maps for vegetation-index raster time series: per-date spatial entropy,
//! per-pixel temporal entropy and per-pixel spatio-temporal entropy, computed over
//! natural-surface pixels only.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ndarray::Array3;
//! use vegentropy::config::EntropyConfig;
//! use vegentropy::pipeline::run_with_mask;
//! use vegentropy::raster::{RasterCube, SpatialMetadata, ValidityMask};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 6, 11).unwrap();
//! let data = Array3::from_shape_fn((2, 5, 5), |(t, r, c)| 0.1 * (t + r + c) as f64 / 10.0);
//! let cube = RasterCube::new(data, vec![start, end], SpatialMetadata::default()).unwrap();
//! let mask = ValidityMask::all_valid(2, (5, 5));
//!
//! let config = EntropyConfig::new("NDVI", "shannon", "demo", start, end);
//! let maps = run_with_mask(&config, &cube, &mask).unwrap();
//! assert_eq!(maps.band_count(), 4);
//! ```
//!
//! ## Estimators
//!
//! | Name | Measure |
//! |------|---------|
//! | `shannon` | -Σ p ln p |
//! | `renyi_0`, `renyi_2`, `renyi` + α | ln(Σ p^α) / (1 - α) |
//! | `rao_q` | Σ Σ p_i p_j d(i, j) |
//!
//! All estimators discretize samples against one global [`Binning`] so values are
//! comparable across windows, pixels and dates.
//!
//! ## Architecture
//!
//! 1. **Masking**: land-cover layers become a [`ValidityMask`], computed once
//! 2. **Sampling**: [`WindowSampler`] gathers valid values for a [`Geometry`]
//! 3. **Engines**: one estimator evaluated over every pixel, in parallel by row
//! 4. **Composition**: [`EntropyMapSet`] orders and labels the output bands
//!
//! ## Feature Flags
//!
//! - `parallel` (default): evaluate rows and engines on the rayon pool
//!
//! [`Binning`]: estimators::approaches::Binning
//! [`ValidityMask`]: raster::ValidityMask
//! [`WindowSampler`]: raster::WindowSampler
//! [`Geometry`]: raster::Geometry
//! [`EntropyMapSet`]: compose::EntropyMapSet

pub mod compose;
pub mod config;
pub mod engines;
pub mod error;
pub mod estimators;
pub mod maybe_rayon;
pub mod pipeline;
pub mod raster;
pub mod schedule;

pub use error::{Error, Result};
