//! Forecasting models for daily close prices

use crate::error::{ForecastError, Result};
use crate::random::RandomSource;
use price_math::round_cents;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

pub mod linear;
pub mod trend_averaged;
pub mod weighted_momentum;

pub use linear::LinearTrend;
pub use trend_averaged::TrendAveraged;
pub use weighted_momentum::WeightedMomentum;

/// Forecast result containing predicted values
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Forecasted values
    values: Vec<f64>,
    /// Number of periods forecasted
    horizon: usize,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(values: Vec<f64>, horizon: usize) -> Result<Self> {
        if values.len() != horizon {
            return Err(ForecastError::LengthMismatch {
                expected: horizon,
                actual: values.len(),
            });
        }

        Ok(Self { values, horizon })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate forecast for future periods
    fn forecast(&self, horizon: usize, rng: &mut dyn RandomSource) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on close prices, oldest first
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on close prices
    fn train(&self, prices: &[f64]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;

    /// Fewest prices `train` accepts
    fn min_history(&self) -> usize;
}

/// The supported forecasters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Least-squares trend line
    #[serde(rename = "linear", alias = "linear-regression")]
    Linear,
    /// Recent average drift plus noise ("ARIMA")
    #[serde(rename = "arima", alias = "trend-averaged")]
    TrendAveraged,
    /// Recency-weighted momentum plus noise ("LSTM")
    #[serde(rename = "lstm", alias = "weighted-momentum")]
    WeightedMomentum,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::Linear,
        ModelKind::TrendAveraged,
        ModelKind::WeightedMomentum,
    ];

    /// Display name for the presentation layer
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear Regression",
            ModelKind::TrendAveraged => "ARIMA",
            ModelKind::WeightedMomentum => "LSTM",
        }
    }

    /// Fewest prices the default model of this kind accepts
    pub fn min_history(self) -> usize {
        match self {
            ModelKind::Linear => LinearTrend::new().min_history(),
            ModelKind::TrendAveraged => TrendAveraged::default().min_history(),
            ModelKind::WeightedMomentum => WeightedMomentum::default().min_history(),
        }
    }

    /// Train the default model of this kind on `prices` and forecast `horizon` steps
    pub fn forecast(
        self,
        prices: &[f64],
        horizon: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<ForecastResult> {
        match self {
            ModelKind::Linear => train_and_forecast(&LinearTrend::new(), prices, horizon, rng),
            ModelKind::TrendAveraged => {
                train_and_forecast(&TrendAveraged::default(), prices, horizon, rng)
            }
            ModelKind::WeightedMomentum => {
                train_and_forecast(&WeightedMomentum::default(), prices, horizon, rng)
            }
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::Linear => "linear",
            ModelKind::TrendAveraged => "arima",
            ModelKind::WeightedMomentum => "lstm",
        };
        f.write_str(name)
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "linear-regression" => Ok(ModelKind::Linear),
            "arima" | "trend-averaged" => Ok(ModelKind::TrendAveraged),
            "lstm" | "weighted-momentum" => Ok(ModelKind::WeightedMomentum),
            _ => Err(ForecastError::InvalidModel(s.to_string())),
        }
    }
}

/// Train `model` on `prices` and forecast `horizon` steps
pub fn train_and_forecast<M: ForecastModel>(
    model: &M,
    prices: &[f64],
    horizon: usize,
    rng: &mut dyn RandomSource,
) -> Result<ForecastResult> {
    model.train(prices)?.forecast(horizon, rng)
}

pub(crate) fn ensure_history(model: &str, required: usize, available: usize) -> Result<()> {
    if available < required {
        return Err(ForecastError::InsufficientHistory {
            model: model.to_string(),
            required,
            available,
        });
    }
    Ok(())
}

pub(crate) fn ensure_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast horizon must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_volatility_ratio(ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "Volatility ratio must be a non-negative number, got {}",
            ratio
        )));
    }
    Ok(())
}

/// `last + drift·i + noise` for `i = 1..=horizon`, rounded to cents
pub(crate) fn project_drift(
    last_price: f64,
    drift: f64,
    volatility: f64,
    horizon: usize,
    rng: &mut dyn RandomSource,
) -> Vec<f64> {
    (1..=horizon)
        .map(|i| {
            let noise = rng.centred_noise(volatility);
            round_cents(last_price + drift * i as f64 + noise)
        })
        .collect()
}
