//! Request/response types for a presentation layer
//!
//! A dashboard supplies a method name and a whole-number confidence percent;
//! it gets back the estimate plus the display lines it shows next to the
//! return histogram. The sample to plot comes from `RiskSnapshot::sample`.

use crate::error::Result;
use crate::estimator::RiskEstimator;
use crate::snapshot::RiskSnapshot;
use crate::types::{ConfidenceLevel, RiskEstimate, VarMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw inputs from a UI control pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// "historical", "parametric" or "monte_carlo"
    pub method: String,

    /// Confidence level in percent, 1..=99
    pub confidence_percent: u32,
}

impl EstimateRequest {
    pub fn new(method: impl Into<String>, confidence_percent: u32) -> Self {
        Self {
            method: method.into(),
            confidence_percent,
        }
    }
}

/// Result of one recomputation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub method: VarMethod,
    pub confidence_percent: u32,
    pub estimate: RiskEstimate,
    pub generated_at: DateTime<Utc>,
}

impl RiskReport {
    /// Validate a request and estimate against `snapshot`
    pub fn evaluate(
        snapshot: &RiskSnapshot,
        estimator: &RiskEstimator,
        request: &EstimateRequest,
    ) -> Result<Self> {
        let method: VarMethod = request.method.parse()?;
        let confidence = ConfidenceLevel::from_percent(request.confidence_percent)?;
        let estimate = snapshot.estimate(estimator, method, confidence)?;

        Ok(Self {
            method,
            confidence_percent: request.confidence_percent,
            estimate,
            generated_at: Utc::now(),
        })
    }

    pub fn var_line(&self) -> String {
        self.line("VaR", self.estimate.var)
    }

    pub fn cvar_line(&self) -> String {
        self.line("CVaR", self.estimate.cvar)
    }

    fn line(&self, measure: &str, value: f64) -> String {
        format!(
            "{} {} at {}% confidence: {:.4}",
            self.method.label(),
            measure,
            self.confidence_percent,
            value
        )
    }
}
