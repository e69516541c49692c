//! Immutable return sample plus its summary statistics
//!
//! A `RiskSnapshot` is built once at startup and passed by reference to every
//! estimation. It is `Send + Sync`; wrap it in an `Arc` to share it across
//! concurrent callers without locking.

use crate::error::Result;
use crate::estimator::RiskEstimator;
use crate::sample::{generate_from, summarize, ReturnSample, SampleSpec, SummaryStatistics};
use crate::types::{ConfidenceLevel, RiskEstimate, VarMethod};

#[derive(Debug, Clone)]
pub struct RiskSnapshot {
    sample: ReturnSample,
    stats: SummaryStatistics,
}

impl RiskSnapshot {
    /// Generate the sample described by `spec` and summarize it
    pub fn generate(spec: &SampleSpec) -> Result<Self> {
        let sample = generate_from(spec)?;
        let snapshot = Self::from_sample(sample);

        tracing::info!(
            observations = snapshot.sample.len(),
            seed = spec.seed,
            mean = snapshot.stats.mean,
            std_dev = snapshot.stats.std_dev,
            "Built return snapshot"
        );

        Ok(snapshot)
    }

    /// Wrap observed returns
    pub fn from_returns(returns: Vec<f64>) -> Result<Self> {
        Ok(Self::from_sample(ReturnSample::new(returns)?))
    }

    pub fn from_sample(sample: ReturnSample) -> Self {
        let stats = summarize(&sample);
        Self { sample, stats }
    }

    pub fn sample(&self) -> &ReturnSample {
        &self.sample
    }

    pub fn stats(&self) -> &SummaryStatistics {
        &self.stats
    }

    pub fn estimate(
        &self,
        estimator: &RiskEstimator,
        method: VarMethod,
        confidence: ConfidenceLevel,
    ) -> Result<RiskEstimate> {
        estimator.estimate(method, confidence, &self.sample, &self.stats)
    }

    /// Estimates for every method at one confidence level, in `VarMethod::ALL` order
    pub fn summary(
        &self,
        estimator: &RiskEstimator,
        confidence: ConfidenceLevel,
    ) -> Result<Vec<(VarMethod, RiskEstimate)>> {
        VarMethod::ALL
            .iter()
            .map(|&method| Ok((method, self.estimate(estimator, method, confidence)?)))
            .collect()
    }
}
