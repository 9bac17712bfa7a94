use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::estimators::approaches::discrete::binning::{Binning, Histogram};
use crate::estimators::approaches::discrete::rao_q::{rao_q, RaoDistance};
use crate::estimators::approaches::discrete::renyi::{renyi_nats, validate_alpha};
use crate::estimators::approaches::discrete::shannon::shannon_nats;
pub use crate::estimators::traits::GlobalValue;

/// Entropy measure selected by name at configuration time.
#[derive(Debug, Clone, Copy)]
pub enum Measure {
    Shannon,
    Renyi { alpha: f64 },
    RaoQ { distance: RaoDistance },
}

impl Measure {
    /// Resolve an estimator name.
    ///
    /// Accepted names: `shannon`, `renyi` (requires `alpha`), `renyi_0`, `renyi_2`, `rao_q`.
    /// A shorthand order (`renyi_2`) conflicting with an explicit `alpha` is rejected.
    pub fn from_name(name: &str, alpha: Option<f64>, distance: RaoDistance) -> Result<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        let measure = match lowered.as_str() {
            "shannon" => Measure::Shannon,
            "rao_q" | "raoq" | "rao" => Measure::RaoQ { distance },
            "renyi" => match alpha {
                Some(a) => Measure::Renyi { alpha: a },
                None => {
                    return Err(Error::invalid_parameter(
                        "alpha",
                        "none",
                        "estimator `renyi` needs an explicit order",
                    ));
                }
            },
            other => match other.strip_prefix("renyi_").map(f64::from_str) {
                Some(Ok(order)) => {
                    if let Some(a) = alpha
                        && a != order
                    {
                        return Err(Error::invalid_parameter(
                            "alpha",
                            a,
                            format!("conflicts with estimator name `{name}`"),
                        ));
                    }
                    Measure::Renyi { alpha: order }
                }
                _ => return Err(Error::UnknownEstimator(name.to_string())),
            },
        };
        if let Measure::Renyi { alpha } = measure {
            validate_alpha(alpha)?;
        }
        Ok(measure)
    }

    /// Short label used in band descriptions and output names.
    pub fn label(&self) -> String {
        match self {
            Measure::Shannon => "shannon".to_string(),
            Measure::Renyi { alpha } => format!("renyi_{alpha}"),
            Measure::RaoQ { .. } => "rao_q".to_string(),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A measure paired with the global binning every sample is discretized against.
///
/// Built once per run; `estimate` is a pure function of the sample.
#[derive(Debug, Clone, Copy)]
pub struct EntropyEstimator {
    measure: Measure,
    binning: Binning,
}

impl EntropyEstimator {
    pub fn new(measure: Measure, binning: Binning) -> Result<Self> {
        binning.validate()?;
        if let Measure::Renyi { alpha } = measure {
            validate_alpha(alpha)?;
        }
        Ok(Self { measure, binning })
    }

    pub fn shannon(binning: Binning) -> Result<Self> {
        Self::new(Measure::Shannon, binning)
    }

    pub fn renyi(alpha: f64, binning: Binning) -> Result<Self> {
        Self::new(Measure::Renyi { alpha }, binning)
    }

    pub fn rao_q(distance: RaoDistance, binning: Binning) -> Result<Self> {
        Self::new(Measure::RaoQ { distance }, binning)
    }

    pub fn measure(&self) -> &Measure {
        &self.measure
    }

    pub fn binning(&self) -> &Binning {
        &self.binning
    }

    pub fn histogram(&self, sample: &[f64]) -> Histogram {
        Histogram::from_sample(sample, &self.binning)
    }

    /// Entropy of `sample` in nats; always finite and >= 0.
    pub fn estimate(&self, sample: &[f64]) -> f64 {
        let histogram = self.histogram(sample);
        match &self.measure {
            Measure::Shannon => shannon_nats(&histogram),
            Measure::Renyi { alpha } => renyi_nats(&histogram, *alpha),
            Measure::RaoQ { distance } => rao_q(&histogram, &self.binning, distance),
        }
    }
}
