//! Averages over the most recent end of a price series
//!
//! Series are ordered oldest-first, so "recent" means the tail.

use crate::{MathError, Result};

/// Weighted average of the newest values.
///
/// `weights[0]` applies to the last value, `weights[1]` to the one before
/// it, and so on. Weights that reach past the start of `values` are dropped
/// from both the numerator and the normaliser.
pub fn recent_weighted_average(values: &[f64], weights: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData {
            required: 1,
            available: 0,
        });
    }

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for (&weight, &value) in weights.iter().zip(values.iter().rev()) {
        weighted_sum += weight * value;
        weight_sum += weight;
    }

    if weight_sum.abs() < f64::EPSILON {
        return Err(MathError::DivisionByZero(
            "weights applied to the series sum to zero".to_string(),
        ));
    }

    Ok(weighted_sum / weight_sum)
}

/// Mean of the last `window` day-over-day changes.
///
/// A series with fewer than `window + 1` points uses every change it has:
/// the window is clipped and the mean divides by the clipped count.
pub fn mean_recent_change(values: &[f64], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "Change window must be greater than zero".to_string(),
        ));
    }
    if values.len() < 2 {
        return Err(MathError::InsufficientData {
            required: 2,
            available: values.len(),
        });
    }

    let pairs = window.min(values.len() - 1);
    let start = values.len() - pairs - 1;
    let total: f64 = values[start..]
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .sum();

    Ok(total / pairs as f64)
}
