//! Value at Risk (VaR) and Conditional VaR estimation
//!
//! Implements three VaR methodologies over a return sample:
//! - Historical VaR: empirical `(1 - c)` percentile of the sample
//! - Parametric VaR: `mean - z(c) * std` from the summary statistics
//! - Monte Carlo VaR: percentile of a fresh normal simulation
//!
//! CVaR is the mean of the observations at or below the VaR threshold. For
//! the parametric method those observations are the original sample, not the
//! closed-form Gaussian tail expectation.

use crate::error::{Result, VarError};
use crate::quantile::{percentile, tail_mean, z_score};
use crate::sample::{ReturnSample, SummaryStatistics};
use crate::types::{ConfidenceLevel, RiskEstimate, VarMethod};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Number of Monte Carlo draws per estimate
    pub simulations: usize,

    /// Seed applied to every Monte Carlo estimate (None = fresh draw per call)
    pub random_seed: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            simulations: 10_000,
            random_seed: None,
        }
    }
}

/// Risk estimator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct RiskEstimator {
    config: EstimatorConfig,
}

impl RiskEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Estimate VaR and CVaR using the configured simulation count
    pub fn estimate(
        &self,
        method: VarMethod,
        confidence: ConfidenceLevel,
        sample: &ReturnSample,
        stats: &SummaryStatistics,
    ) -> Result<RiskEstimate> {
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        estimate_with_rng(
            method,
            confidence.value(),
            sample,
            stats,
            self.config.simulations,
            &mut rng,
        )
    }
}

/// Estimate VaR and CVaR, drawing Monte Carlo samples from fresh entropy
///
/// Repeated Monte Carlo calls with identical inputs return different values.
pub fn estimate(
    method: VarMethod,
    confidence: f64,
    sample: &ReturnSample,
    stats: &SummaryStatistics,
    sim_count: usize,
) -> Result<RiskEstimate> {
    let mut rng = StdRng::from_entropy();
    estimate_with_rng(method, confidence, sample, stats, sim_count, &mut rng)
}

/// Estimate VaR and CVaR with a caller-supplied RNG for the Monte Carlo draw
pub fn estimate_with_rng<R: Rng + ?Sized>(
    method: VarMethod,
    confidence: f64,
    sample: &ReturnSample,
    stats: &SummaryStatistics,
    sim_count: usize,
    rng: &mut R,
) -> Result<RiskEstimate> {
    let confidence = ConfidenceLevel::new(confidence)?;
    if sim_count == 0 {
        return Err(VarError::invalid("simulation count must be positive"));
    }

    let result = match method {
        VarMethod::Historical => historical(confidence, sample),
        VarMethod::Parametric => parametric(confidence, sample, stats),
        VarMethod::MonteCarlo => monte_carlo(confidence, stats, sim_count, rng),
    };

    match &result {
        Ok(est) => tracing::debug!(
            method = %method,
            confidence = confidence.value(),
            var = est.var,
            cvar = est.cvar,
            "Estimated VaR"
        ),
        Err(e) => tracing::warn!(
            method = %method,
            confidence = confidence.value(),
            error = %e,
            "VaR estimation failed"
        ),
    }

    result
}

fn historical(confidence: ConfidenceLevel, sample: &ReturnSample) -> Result<RiskEstimate> {
    let var = threshold(percentile(sample.sorted(), confidence.tail_probability())?)?;
    let cvar = tail_mean(sample.sorted(), var)?;
    finite(RiskEstimate { var, cvar })
}

fn parametric(
    confidence: ConfidenceLevel,
    sample: &ReturnSample,
    stats: &SummaryStatistics,
) -> Result<RiskEstimate> {
    let z = z_score(confidence.value())?;
    let var = threshold(stats.mean - z * stats.std_dev)?;
    let cvar = tail_mean(sample.iter(), var)?;
    finite(RiskEstimate { var, cvar })
}

fn monte_carlo<R: Rng + ?Sized>(
    confidence: ConfidenceLevel,
    stats: &SummaryStatistics,
    sim_count: usize,
    rng: &mut R,
) -> Result<RiskEstimate> {
    let normal = Normal::new(stats.mean, stats.std_dev)
        .map_err(|e| VarError::invalid(format!("simulation distribution: {}", e)))?;

    let mut simulated: Vec<f64> = (0..sim_count).map(|_| normal.sample(rng)).collect();
    simulated.sort_by(f64::total_cmp);

    let var = threshold(percentile(&simulated, confidence.tail_probability())?)?;
    let cvar = tail_mean(&simulated, var)?;
    finite(RiskEstimate { var, cvar })
}

/// VaR must be finite before the tail is cut at it
fn threshold(var: f64) -> Result<f64> {
    if var.is_finite() {
        Ok(var)
    } else {
        Err(VarError::invalid(format!("VaR threshold is not finite: {}", var)))
    }
}

fn finite(estimate: RiskEstimate) -> Result<RiskEstimate> {
    if estimate.var.is_finite() && estimate.cvar.is_finite() {
        Ok(estimate)
    } else {
        Err(VarError::invalid(format!(
            "estimate is not finite (VaR {}, CVaR {})",
            estimate.var, estimate.cvar
        )))
    }
}
