//! Return sample provider
//!
//! Produces the fixed, seeded return observations that historical and
//! Monte Carlo estimation work from, together with their summary statistics.

use crate::error::{Result, VarError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Parameters for generating a synthetic return sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSpec {
    /// Number of observations to draw
    pub count: usize,

    /// RNG seed; the same seed always yields the same sample
    pub seed: u64,

    /// Mean of the normal distribution
    pub mean: f64,

    /// Standard deviation of the normal distribution
    pub scale: f64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            count: 1000,
            seed: 42,
            mean: 0.0,
            scale: 0.02,
        }
    }
}

/// Immutable, non-empty sequence of finite periodic returns
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSample {
    /// Observations in generation order
    values: Vec<f64>,

    /// Same observations, ascending
    sorted: Vec<f64>,
}

impl ReturnSample {
    /// Wrap caller-supplied returns, rejecting empty or non-finite data
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(VarError::invalid("return sample must not be empty"));
        }

        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(VarError::invalid(format!(
                "return sample contains non-finite value {} at index {}",
                values[pos], pos
            )));
        }

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);

        Ok(Self { values, sorted })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observations in ascending order
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }
}

/// Mean and sample standard deviation of a return sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Build statistics directly, e.g. for a known distribution
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(VarError::invalid(format!("mean {} must be finite", mean)));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(VarError::invalid(format!(
                "standard deviation {} must be finite and non-negative",
                std_dev
            )));
        }
        Ok(Self { mean, std_dev })
    }
}

/// Draw `count` returns from N(0, 0.02) using `seed`
pub fn generate(count: usize, seed: u64) -> Result<ReturnSample> {
    generate_from(&SampleSpec {
        count,
        seed,
        ..SampleSpec::default()
    })
}

/// Draw a return sample as described by `spec`
pub fn generate_from(spec: &SampleSpec) -> Result<ReturnSample> {
    if spec.count == 0 {
        return Err(VarError::invalid("sample count must be positive"));
    }
    if !spec.mean.is_finite() {
        return Err(VarError::invalid(format!("sample mean {} must be finite", spec.mean)));
    }

    if !spec.scale.is_finite() {
        return Err(VarError::invalid(format!("sample scale {} must be finite", spec.scale)));
    }

    let normal = Normal::new(spec.mean, spec.scale)
        .map_err(|e| VarError::invalid(format!("sample scale {}: {}", spec.scale, e)))?;

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let values: Vec<f64> = (0..spec.count).map(|_| normal.sample(&mut rng)).collect();

    tracing::debug!(count = spec.count, seed = spec.seed, "Generated return sample");

    ReturnSample::new(values)
}

/// Arithmetic mean and unbiased (N-1) standard deviation
///
/// A single observation has no dispersion estimate; its standard deviation
/// is reported as 0.
pub fn summarize(sample: &ReturnSample) -> SummaryStatistics {
    let mean = sample.values().mean();
    let std_dev = if sample.len() < 2 {
        0.0
    } else {
        sample.values().std_dev()
    };

    SummaryStatistics { mean, std_dev }
}
