// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run configuration and its validation

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::binning::Binning;
use crate::estimators::approaches::discrete::rao_q::RaoDistance;
use crate::estimators::{EntropyEstimator, Measure};
use crate::raster::window::WindowSize;
use crate::schedule::{acquisition_dates, Frequency};

/// Vegetation indices the upstream compositor can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VegetationIndex {
    /// (NIR - Red) / (NIR + Red)
    Ndvi,
    /// (Green - NIR) / (Green + NIR)
    Ndwi,
    /// 1.5 (NIR - Red) / (NIR + Red + 0.5)
    Savi,
    /// (Blue - NIR) / (Blue + NIR)
    Bai,
}

impl VegetationIndex {
    pub fn name(&self) -> &'static str {
        match self {
            VegetationIndex::Ndvi => "NDVI",
            VegetationIndex::Ndwi => "NDWI",
            VegetationIndex::Savi => "SAVI",
            VegetationIndex::Bai => "BAI",
        }
    }

    /// Theoretical value range of the index.
    pub fn natural_range(&self) -> (f64, f64) {
        match self {
            VegetationIndex::Savi => (-1.5, 1.5),
            _ => (-1.0, 1.0),
        }
    }
}

impl FromStr for VegetationIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NDVI" => Ok(VegetationIndex::Ndvi),
            "NDWI" => Ok(VegetationIndex::Ndwi),
            "SAVI" => Ok(VegetationIndex::Savi),
            "BAI" => Ok(VegetationIndex::Bai),
            _ => Err(Error::UnknownIndex(s.to_string())),
        }
    }
}

impl fmt::Display for VegetationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_window_size() -> usize {
    3
}

fn default_frequency() -> String {
    "10D".to_string()
}

fn default_min_valid_fraction() -> f64 {
    0.5
}

/// Raw, unvalidated configuration as read from a file or assembled by a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyConfig {
    /// Vegetation index identifier (`NDVI`, `NDWI`, `SAVI`, `BAI`)
    pub index: String,
    /// Estimator name (`shannon`, `renyi`, `renyi_0`, `renyi_2`, `rao_q`)
    pub estimator: String,
    /// Rényi order for the bare `renyi` estimator
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub rao_distance: RaoDistance,
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    /// Area-of-interest identifier, used in output names only
    pub aoi: String,
    #[serde(default = "default_min_valid_fraction")]
    pub min_valid_fraction: f64,
    #[serde(default)]
    pub binning: Binning,
    /// Output value for uncomputable cells; NaN when unset
    #[serde(default)]
    pub sentinel: Option<f64>,
}

impl EntropyConfig {
    pub fn new(
        index: impl Into<String>,
        estimator: impl Into<String>,
        aoi: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            index: index.into(),
            estimator: estimator.into(),
            alpha: None,
            rao_distance: RaoDistance::default(),
            window_size: default_window_size(),
            start,
            end,
            frequency: default_frequency(),
            aoi: aoi.into(),
            min_valid_fraction: default_min_valid_fraction(),
            binning: Binning::default(),
            sentinel: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolve every name and check every parameter; nothing downstream re-validates.
    pub fn validate(&self) -> Result<ValidatedConfig> {
        let window = WindowSize::new(self.window_size)?;
        let index = VegetationIndex::from_str(&self.index)?;
        let measure = Measure::from_name(&self.estimator, self.alpha, self.rao_distance)?;
        let estimator = EntropyEstimator::new(measure, self.binning)?;
        let frequency = Frequency::from_str(&self.frequency)?;

        if self.start > self.end {
            return Err(Error::invalid_parameter(
                "start",
                self.start,
                format!("must not be after end date {}", self.end),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_valid_fraction) {
            return Err(Error::invalid_parameter(
                "min_valid_fraction",
                self.min_valid_fraction,
                "must lie in [0, 1]",
            ));
        }
        let sentinel = self.sentinel.unwrap_or(f64::NAN);
        if sentinel >= 0.0 {
            return Err(Error::invalid_parameter(
                "sentinel",
                sentinel,
                "must be NaN or negative to stay distinct from entropy values",
            ));
        }
        let (lo, hi) = index.natural_range();
        if self.binning.min > lo || self.binning.max < hi {
            log::warn!(
                "Binning range [{}, {}] does not cover the {} range [{}, {}]; outliers are clamped",
                self.binning.min,
                self.binning.max,
                index,
                lo,
                hi
            );
        }

        Ok(ValidatedConfig {
            index,
            estimator,
            window,
            frequency,
            schedule: acquisition_dates(self.start, self.end, frequency)?,
            start: self.start,
            end: self.end,
            aoi: self.aoi.clone(),
            min_valid_fraction: self.min_valid_fraction,
            sentinel,
        })
    }
}

/// Configuration with every name resolved once; cheap to share across workers.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub index: VegetationIndex,
    pub estimator: EntropyEstimator,
    pub window: WindowSize,
    pub frequency: Frequency,
    /// Expected acquisition dates of the cube
    pub schedule: Vec<NaiveDate>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub aoi: String,
    pub min_valid_fraction: f64,
    pub sentinel: f64,
}

impl ValidatedConfig {
    pub fn estimator_label(&self) -> String {
        self.estimator.measure().label()
    }

    /// `{entropy}_{index}_{AOI}_{start}_{end}_w{window_size}`, without extension.
    pub fn output_name(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}_w{}",
            self.estimator_label(),
            self.index,
            self.aoi,
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
            self.window.get()
        )
    }
}
