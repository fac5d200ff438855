//! Hold-out back-testing of forecast models

use crate::error::{ForecastError, Result};
use crate::models::{
    ForecastModel, LinearTrend, ModelKind, TrainedForecastModel, TrendAveraged, WeightedMomentum,
};
use crate::random::RandomSource;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Number of trailing prices held out by default
pub const DEFAULT_HOLDOUT: usize = 7;

/// Coarse accuracy bucket for a back-tested RMSE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyRating {
    High,
    Medium,
    Low,
}

impl AccuracyRating {
    /// Below 1 is high, below 3 is medium, anything else is low
    pub fn from_rmse(rmse: f64) -> Self {
        if rmse < 1.0 {
            AccuracyRating::High
        } else if rmse < 3.0 {
            AccuracyRating::Medium
        } else {
            AccuracyRating::Low
        }
    }
}

impl fmt::Display for AccuracyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AccuracyRating::High => "High",
            AccuracyRating::Medium => "Medium",
            AccuracyRating::Low => "Low",
        };
        f.write_str(text)
    }
}

/// Outcome of one back-test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestReport {
    /// Held-out actual prices
    pub actual: Vec<f64>,
    /// Model predictions for the held-out window
    pub predicted: Vec<f64>,
    /// Root mean squared error between the two
    pub rmse: f64,
    pub rating: AccuracyRating,
}

impl fmt::Display for BacktestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Back-test over {} held-out days:", self.actual.len())?;
        for (actual, predicted) in self.actual.iter().zip(&self.predicted) {
            writeln!(f, "  actual {:>10.2}  predicted {:>10.2}", actual, predicted)?;
        }
        writeln!(f, "  RMSE:     {:.4}", self.rmse)?;
        writeln!(f, "  Accuracy: {}", self.rating)?;
        Ok(())
    }
}

/// Root mean squared error; sequences must have equal, non-zero length
pub fn calculate_rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.len() != predicted.len() {
        return Err(ForecastError::LengthMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }
    Ok(price_math::root_mean_squared_error(actual, predicted)?)
}

/// Re-runs a model on all but the last `holdout` prices and scores the
/// forecast against the prices it did not see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backtester {
    holdout: usize,
}

impl Default for Backtester {
    fn default() -> Self {
        Self {
            holdout: DEFAULT_HOLDOUT,
        }
    }
}

impl Backtester {
    pub fn new(holdout: usize) -> Result<Self> {
        if holdout == 0 {
            return Err(ForecastError::InvalidParameter(
                "Hold-out window must be at least 1".to_string(),
            ));
        }
        Ok(Self { holdout })
    }

    pub fn holdout(&self) -> usize {
        self.holdout
    }

    /// Back-test `model` over `prices` (oldest first)
    pub fn evaluate<M: ForecastModel>(
        &self,
        model: &M,
        prices: &[f64],
        rng: &mut dyn RandomSource,
    ) -> Result<BacktestReport> {
        let required = self.holdout + model.min_history();
        if prices.len() < required {
            return Err(ForecastError::InsufficientHistory {
                model: format!("{} back-test", model.name()),
                required,
                available: prices.len(),
            });
        }

        let (train, actual) = prices.split_at(prices.len() - self.holdout);
        let trained = model.train(train)?;
        let predicted = trained.forecast(self.holdout, rng)?.into_values();
        let rmse = calculate_rmse(actual, &predicted)?;
        debug!(
            model = trained.name(),
            holdout = self.holdout,
            rmse,
            "back-test complete"
        );

        Ok(BacktestReport {
            actual: actual.to_vec(),
            predicted,
            rmse,
            rating: AccuracyRating::from_rmse(rmse),
        })
    }

    /// Back-test the default model of `kind`
    pub fn evaluate_kind(
        &self,
        kind: ModelKind,
        prices: &[f64],
        rng: &mut dyn RandomSource,
    ) -> Result<BacktestReport> {
        match kind {
            ModelKind::Linear => self.evaluate(&LinearTrend::new(), prices, rng),
            ModelKind::TrendAveraged => self.evaluate(&TrendAveraged::default(), prices, rng),
            ModelKind::WeightedMomentum => {
                self.evaluate(&WeightedMomentum::default(), prices, rng)
            }
        }
    }
}
