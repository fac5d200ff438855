//! Weighted momentum forecasting, presented to users as "LSTM"

use crate::error::{ForecastError, Result};
use crate::models::{
    ensure_history, ensure_horizon, ensure_volatility_ratio, project_drift, ForecastModel,
    ForecastResult, TrainedForecastModel,
};
use crate::random::RandomSource;
use price_math::recent_weighted_average;
use tracing::debug;

const DEFAULT_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];

/// Weighted average of the newest closes compared against the close just
/// before the weighted window; the difference is the per-day trend.
#[derive(Debug, Clone)]
pub struct WeightedMomentum {
    /// Name of the model
    name: String,
    /// Weights, most recent price first
    weights: Vec<f64>,
    /// Noise amplitude as a fraction of the last price
    volatility_ratio: f64,
}

/// Trained weighted momentum model
#[derive(Debug, Clone)]
pub struct TrainedWeightedMomentum {
    name: String,
    last_price: f64,
    weighted_average: f64,
    trend: f64,
    volatility: f64,
}

impl WeightedMomentum {
    /// Create a new model with custom weights (most recent first)
    pub fn new(weights: Vec<f64>, volatility_ratio: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "At least one weight is required".to_string(),
            ));
        }
        let invalid = weights.iter().any(|w| !w.is_finite() || *w < 0.0);
        if invalid || weights.iter().sum::<f64>() <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Weights must be non-negative with a positive sum".to_string(),
            ));
        }
        ensure_volatility_ratio(volatility_ratio)?;

        Ok(Self {
            name: format!("LSTM (lookback={})", weights.len()),
            weights,
            volatility_ratio,
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn volatility_ratio(&self) -> f64 {
        self.volatility_ratio
    }
}

impl Default for WeightedMomentum {
    fn default() -> Self {
        Self {
            name: format!("LSTM (lookback={})", DEFAULT_WEIGHTS.len()),
            weights: DEFAULT_WEIGHTS.to_vec(),
            volatility_ratio: 0.005,
        }
    }
}

impl ForecastModel for WeightedMomentum {
    type Trained = TrainedWeightedMomentum;

    fn train(&self, prices: &[f64]) -> Result<TrainedWeightedMomentum> {
        // The baseline sits one step before the oldest weighted price
        ensure_history(&self.name, self.min_history(), prices.len())?;

        let n = prices.len();
        let last_price = prices[n - 1];
        let weighted_average = recent_weighted_average(prices, &self.weights)?;
        let baseline = prices[n - 1 - self.weights.len()];
        let trend = weighted_average - baseline;
        let volatility = last_price * self.volatility_ratio;
        debug!(
            last_price,
            weighted_average,
            baseline,
            trend,
            volatility,
            "fitted weighted momentum"
        );

        Ok(TrainedWeightedMomentum {
            name: self.name.clone(),
            last_price,
            weighted_average,
            trend,
            volatility,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        self.weights.len() + 1
    }
}

impl TrainedWeightedMomentum {
    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    pub fn weighted_average(&self) -> f64 {
        self.weighted_average
    }

    /// Per-day trend added at each forecast step
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Full width of the noise band around each step
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl TrainedForecastModel for TrainedWeightedMomentum {
    fn forecast(&self, horizon: usize, rng: &mut dyn RandomSource) -> Result<ForecastResult> {
        ensure_horizon(horizon)?;

        let values = project_drift(self.last_price, self.trend, self.volatility, horizon, rng);

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
