//! Error measures between actual and predicted sequences

use crate::{MathError, Result};

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(MathError::LengthMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(MathError::InvalidInput(
            "Cannot measure error over empty sequences".to_string(),
        ));
    }
    Ok(())
}

/// Mean squared error
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Root mean squared error, `sqrt(mean((actual - predicted)²))`
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mean_squared_error(actual, predicted).map(f64::sqrt)
}
