//! Request-level orchestration: fetch, forecast, back-test

use crate::backtest::{AccuracyRating, Backtester};
use crate::config::ForecastConfig;
use crate::error::{ForecastError, Result};
use crate::models::ModelKind;
use crate::providers::StockDataProvider;
use crate::random::{RandomSource, ThreadRandom};
use crate::utils::future_dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Ticker and model to forecast with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub ticker: String,
    pub model: ModelKind,
}

impl PredictionRequest {
    pub fn new(ticker: impl Into<String>, model: ModelKind) -> Self {
        Self {
            ticker: ticker.into(),
            model,
        }
    }
}

/// Forward forecast plus its back-tested error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub ticker: String,
    pub model: ModelKind,
    /// One price per forecast day
    pub predicted_prices: Vec<f64>,
    /// Consecutive calendar days after the last known date
    pub predicted_dates: Vec<NaiveDate>,
    /// RMSE of the same model over the held-out tail of the series
    pub rmse: f64,
    pub accuracy: AccuracyRating,
}

/// Stateless forecasting front end over a [`StockDataProvider`]
#[derive(Debug, Clone)]
pub struct ForecastService<P> {
    provider: P,
    config: ForecastConfig,
}

impl<P: StockDataProvider> ForecastService<P> {
    /// Service with the default seven-day horizon and hold-out
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: ForecastConfig::default(),
        }
    }

    pub fn with_config(provider: P, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Forecast using the thread RNG for model noise
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.predict_with(request, &mut ThreadRandom)
    }

    /// Parse `model` by name, then forecast
    pub fn predict_named(&self, ticker: &str, model: &str) -> Result<PredictionResult> {
        let model: ModelKind = model.parse()?;
        self.predict(&PredictionRequest::new(ticker, model))
    }

    /// Forecast with an explicit randomness source
    pub fn predict_with(
        &self,
        request: &PredictionRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<PredictionResult> {
        let series = self.provider.fetch(&request.ticker).map_err(|e| {
            warn!(ticker = %request.ticker, error = %e, "price fetch failed");
            ForecastError::from(e)
        })?;
        let series = series.most_recent(self.config.history_days);
        let prices = series.closes();

        let kind = request.model;
        if prices.len() < kind.min_history() {
            return Err(ForecastError::InsufficientHistory {
                model: kind.label().to_string(),
                required: kind.min_history(),
                available: prices.len(),
            });
        }

        let forecast = kind.forecast(&prices, self.config.horizon, rng)?;
        let report = Backtester::new(self.config.holdout)?.evaluate_kind(kind, &prices, rng)?;
        let predicted_dates = future_dates(series.last_date(), self.config.horizon)?;

        info!(
            ticker = %series.ticker(),
            model = %kind,
            history = prices.len(),
            rmse = report.rmse,
            "prediction complete"
        );

        Ok(PredictionResult {
            ticker: series.ticker().to_string(),
            model: kind,
            predicted_prices: forecast.into_values(),
            predicted_dates,
            rmse: report.rmse,
            accuracy: report.rating,
        })
    }
}
