//! Engine configuration
//!
//! Loaded from YAML or JSON. Every section is optional and falls back to
//! the defaults: 1000 draws from N(0, 0.02) with seed 42, 10,000 Monte Carlo
//! simulations, historical method at 95%.

use crate::error::{Result, VarError};
use crate::estimator::EstimatorConfig;
use crate::sample::{SampleSpec, SummaryStatistics};
use crate::types::{ConfidenceLevel, VarMethod};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete engine configuration document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Synthetic return sample
    pub sample: SampleSpec,

    /// Monte Carlo settings
    pub simulation: SimulationConfig,

    /// Initial control values for a presentation layer
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Draws per Monte Carlo estimate
    pub count: usize,

    /// Fixed seed for every Monte Carlo estimate (null = fresh draw per call)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub method: VarMethod,
    pub confidence_percent: u32,

    /// Lowest percent a confidence control offers
    pub min_confidence_percent: u32,

    /// Highest percent a confidence control offers
    pub max_confidence_percent: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            method: VarMethod::Historical,
            confidence_percent: 95,
            min_confidence_percent: 80,
            max_confidence_percent: 99,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document
    ///
    /// # Example
    ///
    /// ```
    /// use ag_var::EngineConfig;
    ///
    /// let yaml = r#"
    /// sample:
    ///   count: 500
    ///   seed: 7
    /// simulation:
    ///   count: 2000
    /// "#;
    ///
    /// let config = EngineConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(config.sample.count, 500);
    /// assert_eq!(config.sample.scale, 0.02);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)
            .map_err(|e| VarError::Config(format!("Failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| VarError::Config(format!("Failed to parse JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VarError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Check every value against the constraints the engine enforces
    pub fn validate(&self) -> Result<()> {
        if self.sample.count == 0 {
            return Err(VarError::invalid("sample.count must be positive"));
        }
        SummaryStatistics::new(self.sample.mean, self.sample.scale)?;

        if self.simulation.count == 0 {
            return Err(VarError::invalid("simulation.count must be positive"));
        }

        let defaults = &self.defaults;
        ConfidenceLevel::from_percent(defaults.min_confidence_percent)?;
        ConfidenceLevel::from_percent(defaults.max_confidence_percent)?;
        // an inverted range is empty, so it is rejected here too
        if !(defaults.min_confidence_percent..=defaults.max_confidence_percent)
            .contains(&defaults.confidence_percent)
        {
            return Err(VarError::invalid(format!(
                "defaults.confidence_percent {} must lie in [{}, {}]",
                defaults.confidence_percent,
                defaults.min_confidence_percent,
                defaults.max_confidence_percent
            )));
        }
        Ok(())
    }

    pub fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            simulations: self.simulation.count,
            random_seed: self.simulation.seed,
        }
    }
}
