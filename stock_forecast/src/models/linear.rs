//! Linear regression trend forecasting

use crate::error::Result;
use crate::models::{
    ensure_history, ensure_horizon, ForecastModel, ForecastResult, TrainedForecastModel,
};
use crate::random::RandomSource;
use price_math::{round_cents, LinearFit};
use tracing::debug;

/// Least-squares line through the closes, extrapolated forward
#[derive(Debug, Clone)]
pub struct LinearTrend {
    /// Name of the model
    name: String,
}

/// Trained linear trend model
#[derive(Debug, Clone)]
pub struct TrainedLinearTrend {
    /// Name of the model
    name: String,
    /// Fitted line over the price index
    fit: LinearFit,
}

impl LinearTrend {
    pub fn new() -> Self {
        Self {
            name: "Linear Regression".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn train(&self, prices: &[f64]) -> Result<TrainedLinearTrend> {
        ensure_history(&self.name, self.min_history(), prices.len())?;

        let fit = LinearFit::over_index(prices)?;
        debug!(
            slope = fit.slope(),
            intercept = fit.intercept(),
            points = fit.points(),
            "fitted linear trend"
        );

        Ok(TrainedLinearTrend {
            name: self.name.clone(),
            fit,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_history(&self) -> usize {
        2
    }
}

impl TrainedLinearTrend {
    pub fn slope(&self) -> f64 {
        self.fit.slope()
    }

    pub fn intercept(&self) -> f64 {
        self.fit.intercept()
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn forecast(&self, horizon: usize, _rng: &mut dyn RandomSource) -> Result<ForecastResult> {
        ensure_horizon(horizon)?;

        let values = (1..=horizon)
            .map(|i| round_cents(self.fit.extrapolate(i)))
            .collect();

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
