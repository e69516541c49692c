//! Order-statistic helpers used by every VaR method

use crate::error::{Result, VarError};
use statrs::distribution::{ContinuousCDF, Normal};

/// Percentile of an ascending slice using linear interpolation between
/// order statistics (rank `p * (n - 1)`), `p` in [0, 1]
pub fn percentile(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(VarError::invalid("cannot take a percentile of an empty sample"));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(VarError::invalid(format!(
            "percentile rank {} must lie in [0, 1]",
            p
        )));
    }

    let rank = p * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if lower == upper {
        Ok(sorted[lower])
    } else {
        Ok(sorted[lower] + frac * (sorted[upper] - sorted[lower]))
    }
}

/// Mean of all observations at or below `threshold`
pub fn tail_mean<'a, I>(values: I, threshold: f64) -> Result<f64>
where
    I: IntoIterator<Item = &'a f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| **v <= threshold)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return Err(VarError::UndefinedConditionalMean { threshold });
    }

    Ok(sum / count as f64)
}

/// One-sided standard normal quantile for a confidence level, e.g. 1.645 for 0.95
pub fn z_score(confidence: f64) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| VarError::invalid(format!("standard normal: {}", e)))?;

    Ok(normal.inverse_cdf(confidence))
}
