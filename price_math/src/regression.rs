//! Ordinary least squares over an integer time index
//!
//! Prices are regressed against their position `x = 0, 1, ..., n - 1`,
//! which is the trend model used by the linear forecaster.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Fitted straight line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
    points: usize,
}

impl LinearFit {
    /// Fit a line through `values`, using each value's index as `x`.
    ///
    /// Uses the closed form
    /// `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)` and
    /// `intercept = (Σy − slope·Σx) / n`.
    pub fn over_index(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData {
                required: 2,
                available: values.len(),
            });
        }

        let n = values.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < f64::EPSILON {
            return Err(MathError::DivisionByZero(
                "x values have no spread, slope is undefined".to_string(),
            ));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self {
            slope,
            intercept,
            points: values.len(),
        })
    }

    /// Value of the fitted line at `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Extrapolate `periods_ahead` steps past the last fitted point.
    ///
    /// One step ahead of `n` points is `x = n`.
    pub fn extrapolate(&self, periods_ahead: usize) -> f64 {
        self.value_at((self.points + periods_ahead - 1) as f64)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of points the line was fitted on
    pub fn points(&self) -> usize {
        self.points
    }
}
