//! Drift-plus-noise forecasting, presented to users as "ARIMA"

use crate::error::{ForecastError, Result};
use crate::models::{
    ensure_history, ensure_horizon, ensure_volatility_ratio, project_drift, ForecastModel,
    ForecastResult, TrainedForecastModel,
};
use crate::random::RandomSource;
use price_math::mean_recent_change;
use tracing::debug;

/// Projects the mean of the recent daily changes forward, with noise
/// proportional to the last price.
#[derive(Debug, Clone)]
pub struct TrendAveraged {
    /// Name of the model
    name: String,
    /// Number of recent day-over-day changes averaged
    window: usize,
    /// Noise amplitude as a fraction of the last price
    volatility_ratio: f64,
}

/// Trained trend-averaged model
#[derive(Debug, Clone)]
pub struct TrainedTrendAveraged {
    name: String,
    last_price: f64,
    avg_change: f64,
    volatility: f64,
}

impl TrendAveraged {
    /// Create a new model averaging `window` changes with the given noise ratio
    pub fn new(window: usize, volatility_ratio: f64) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Change window must be positive".to_string(),
            ));
        }
        ensure_volatility_ratio(volatility_ratio)?;

        Ok(Self {
            name: format!("ARIMA (window={})", window),
            window,
            volatility_ratio,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn volatility_ratio(&self) -> f64 {
        self.volatility_ratio
    }
}

impl Default for TrendAveraged {
    fn default() -> Self {
        Self {
            name: "ARIMA (window=5)".to_string(),
            window: 5,
            volatility_ratio: 0.01,
        }
    }
}

impl ForecastModel for TrendAveraged {
    type Trained = TrainedTrendAveraged;

    fn train(&self, prices: &[f64]) -> Result<TrainedTrendAveraged> {
        ensure_history(&self.name, self.min_history(), prices.len())?;

        let last_price = prices[prices.len() - 1];
        let avg_change = mean_recent_change(prices, self.window)?;
        let volatility = last_price * self.volatility_ratio;
        debug!(last_price, avg_change, volatility, "fitted trend-averaged drift");

        Ok(TrainedTrendAveraged {
            name: self.name.clone(),
            last_price,
            avg_change,
            volatility,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        2
    }
}

impl TrainedTrendAveraged {
    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    /// Mean of the recent daily changes
    pub fn avg_change(&self) -> f64 {
        self.avg_change
    }

    /// Full width of the noise band around each step
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl TrainedForecastModel for TrainedTrendAveraged {
    fn forecast(&self, horizon: usize, rng: &mut dyn RandomSource) -> Result<ForecastResult> {
        ensure_horizon(horizon)?;

        let values = project_drift(
            self.last_price,
            self.avg_change,
            self.volatility,
            horizon,
            rng,
        );

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
