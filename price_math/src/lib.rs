//! # Price Math
//!
//! Numeric kernels behind the price forecasters.
//! This crate provides the least-squares trend fit, recency-weighted
//! averages, drift estimation and the error measures used for back-testing.

use thiserror::Error;

pub mod averages;
pub mod error_metrics;
pub mod regression;

pub use averages::{mean_recent_change, recent_weighted_average};
pub use error_metrics::{mean_squared_error, root_mean_squared_error};
pub use regression::LinearFit;

/// Errors that can occur in price calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: need {required}, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for price math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Round to two decimal places, the precision prices are quoted at.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
