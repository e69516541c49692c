//! # ag-var: Tail-Risk Estimation Engine
//!
//! This library estimates Value at Risk (VaR) and Conditional Value at Risk
//! (CVaR) for a single asset from a distribution of periodic returns.
//!
//! ## Core Components
//!
//! - **Return sample provider** (`sample`): seeded normal return draws and
//!   their mean / sample standard deviation
//! - **Risk estimator** (`estimator`): Historical, Parametric and Monte Carlo
//!   VaR/CVaR at any confidence level in (0, 1)
//! - **RiskSnapshot**: the sample and statistics, built once and shared
//! - **RiskReport**: request/response pair for a presentation layer
//!
//! VaR and CVaR are reported as returns, so a 95% VaR of `-0.033` means a
//! 5% chance of a period return at or below -3.3%.
//!
//! ## Example Usage
//!
//! ```rust
//! use ag_var::{ConfidenceLevel, RiskEstimator, RiskSnapshot, SampleSpec, VarMethod};
//!
//! // 1000 draws from N(0, 0.02), seed 42
//! let snapshot = RiskSnapshot::generate(&SampleSpec::default()).unwrap();
//! let estimator = RiskEstimator::default();
//!
//! let confidence = ConfidenceLevel::from_percent(95).unwrap();
//! let estimate = snapshot
//!     .estimate(&estimator, VarMethod::Historical, confidence)
//!     .unwrap();
//!
//! assert!(estimate.var < 0.0);
//! assert!(estimate.cvar <= estimate.var);
//! ```

mod config;
mod error;
pub mod estimator;
pub mod quantile;
mod report;
pub mod sample;
mod snapshot;
mod types;

pub use config::{DefaultsConfig, EngineConfig, SimulationConfig};
pub use error::{Result, VarError};
pub use estimator::{estimate, estimate_with_rng, EstimatorConfig, RiskEstimator};
pub use report::{EstimateRequest, RiskReport};
pub use sample::{generate, generate_from, summarize, ReturnSample, SampleSpec, SummaryStatistics};
pub use snapshot::RiskSnapshot;
pub use types::{ConfidenceLevel, RiskEstimate, VarMethod};
