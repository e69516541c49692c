//! Core value types shared by the estimator and the report layer

use crate::error::{Result, VarError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// VaR estimation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarMethod {
    /// Empirical percentile of the return sample
    Historical,

    /// Normal quantile from the sample mean and standard deviation
    Parametric,

    /// Percentile of a fresh normal simulation
    MonteCarlo,
}

impl VarMethod {
    /// All methods, in reporting order
    pub const ALL: [VarMethod; 3] = [
        VarMethod::Historical,
        VarMethod::Parametric,
        VarMethod::MonteCarlo,
    ];

    /// Machine identifier accepted by `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            VarMethod::Historical => "historical",
            VarMethod::Parametric => "parametric",
            VarMethod::MonteCarlo => "monte_carlo",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            VarMethod::Historical => "Historical",
            VarMethod::Parametric => "Parametric",
            VarMethod::MonteCarlo => "Monte Carlo",
        }
    }
}

impl fmt::Display for VarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarMethod {
    type Err = VarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "historical" => Ok(VarMethod::Historical),
            "parametric" => Ok(VarMethod::Parametric),
            "monte_carlo" | "monte carlo" | "monte-carlo" => Ok(VarMethod::MonteCarlo),
            other => Err(VarError::invalid(format!("unknown VaR method '{}'", other))),
        }
    }
}

/// Confidence level strictly inside (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Validate a confidence level given as a fraction (e.g. 0.95)
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(VarError::invalid(format!(
                "confidence level {} must lie strictly between 0 and 1",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Validate a confidence level given as a whole percentage (e.g. 95)
    pub fn from_percent(percent: u32) -> Result<Self> {
        if percent == 0 || percent >= 100 {
            return Err(VarError::invalid(format!(
                "confidence percent {} must lie in [1, 99]",
                percent
            )));
        }
        Self::new(f64::from(percent) / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Probability mass of the lower tail, `1 - c`
    pub fn tail_probability(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = VarError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

/// VaR/CVaR pair produced by one estimation
///
/// Both values are expressed as returns: VaR is the lower-tail threshold and
/// CVaR the mean of the observations at or below it, so `cvar <= var`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// Value at Risk threshold
    pub var: f64,

    /// Conditional Value at Risk (expected shortfall)
    pub cvar: f64,
}
