// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Acquisition-date schedule derived from a date range and sampling frequency

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, TimeDelta};

use crate::error::{Error, Result};

/// Days per month step; composites are cut on a fixed 30-day grid.
pub const DAYS_PER_MONTH: i64 = 30;

/// Longest accepted step, in days (one century).
pub const MAX_STEP_DAYS: i64 = 36_500;

/// Temporal sampling frequency, written `"<n>D"` or `"<n>M"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Days(u32),
    Months(u32),
}

impl Frequency {
    pub fn step_days(&self) -> i64 {
        match self {
            Frequency::Days(n) => i64::from(*n),
            Frequency::Months(n) => i64::from(*n) * DAYS_PER_MONTH,
        }
    }

    /// Step between acquisitions; `InvalidFrequency` when the step is zero or
    /// longer than [`MAX_STEP_DAYS`].
    pub fn step(&self) -> Result<TimeDelta> {
        let days = self.step_days();
        if !(1..=MAX_STEP_DAYS).contains(&days) {
            return Err(Error::InvalidFrequency(self.to_string()));
        }
        TimeDelta::try_days(days).ok_or_else(|| Error::InvalidFrequency(self.to_string()))
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidFrequency(s.to_string());
        let unit = s.chars().last().ok_or_else(invalid)?;
        let count = &s[..s.len() - unit.len_utf8()];
        // A bare unit ("D", "M") means one step, as in pandas offsets.
        let n: u32 = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|_| invalid())?
        };
        if n == 0 {
            return Err(invalid());
        }
        let frequency = match unit.to_ascii_uppercase() {
            'D' => Frequency::Days(n),
            'M' => Frequency::Months(n),
            _ => return Err(invalid()),
        };
        frequency.step().map_err(|_| invalid())?;
        Ok(frequency)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Days(n) => write!(f, "{n}D"),
            Frequency::Months(n) => write!(f, "{n}M"),
        }
    }
}

/// Dates from `start` stepping by `frequency` while not after `end` (inclusive).
pub fn acquisition_dates(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
) -> Result<Vec<NaiveDate>> {
    let step = frequency.step()?;
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.checked_add_signed(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(dates)
}
