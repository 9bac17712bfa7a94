// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for entropy map computation

use thiserror::Error;

/// Errors raised before any per-pixel work begins.
///
/// Data gaps (missing classifications, sparse windows) are never errors; they
/// surface as sentinel cells in the output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid window size {size}: must be an odd integer >= 3")]
    InvalidWindowSize { size: usize },

    #[error("Unknown entropy estimator: {0}")]
    UnknownEstimator(String),

    #[error("Unknown vegetation index: {0}")]
    UnknownIndex(String),

    #[error("Invalid sampling frequency: {0} (expected e.g. \"10D\" or \"1M\")")]
    InvalidFrequency(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Cube has {bands} bands but {dates} acquisition dates")]
    DateCountMismatch { dates: usize, bands: usize },

    #[error("Raster cube is empty")]
    EmptyCube,

    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for entropy map operations
pub type Result<T> = std::result::Result<T, Error>;
