//! Error types for VaR/CVaR estimation

use thiserror::Error;

/// Errors that can occur while building a return sample or estimating risk
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VarError {
    /// Malformed confidence level, method, simulation count or sample
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No observation lies at or below the VaR threshold
    #[error("Conditional mean undefined: no observations at or below threshold {threshold}")]
    UndefinedConditionalMean {
        /// The VaR threshold the tail was cut at
        threshold: f64,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VarError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        VarError::InvalidParameter(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, VarError>;
