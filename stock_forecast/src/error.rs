//! Error types for the stock_forecast crate

use price_math::MathError;
use thiserror::Error;

/// Failures reported by stock data and news providers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Unknown ticker, or the source has no data for it
    #[error("No data found for ticker {0}")]
    NotFound(String),

    /// The source throttled the request
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The source could not be reached or read
    #[error("Network error: {0}")]
    Network(String),

    /// The source answered with something we could not decode
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Custom error types for the stock_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Series too short for the requested model or back-test
    #[error("Insufficient history for {model}: need at least {required} prices, have {available}")]
    InsufficientHistory {
        model: String,
        required: usize,
        available: usize,
    },

    /// Model name outside the supported set
    #[error("Unknown prediction model: {0}")]
    InvalidModel(String),

    /// Actual and predicted sequences differ in length
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation
    #[error("Data error: {0}")]
    DataError(String),

    /// Arithmetic guard tripped
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Provider failure, passed through unchanged
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Configuration could not be read or failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData {
                required,
                available,
            } => ForecastError::InsufficientHistory {
                model: "price math".to_string(),
                required,
                available,
            },
            MathError::InvalidInput(msg) => ForecastError::InvalidParameter(msg),
            MathError::DivisionByZero(msg) => ForecastError::DivisionByZero(msg),
            MathError::LengthMismatch { expected, actual } => {
                ForecastError::LengthMismatch { expected, actual }
            }
        }
    }
}

impl From<toml::de::Error> for ForecastError {
    fn from(err: toml::de::Error) -> Self {
        ForecastError::Config(err.to_string())
    }
}
