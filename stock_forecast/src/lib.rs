//! # Stock Forecast
//!
//! Short-horizon forecasting of daily stock closes with back-tested error
//! estimates.
//!
//! ## Features
//!
//! - Daily OHLCV history per ticker (`PriceSeries`), always oldest-first
//! - Three forecasters: a least-squares trend line, a drift-plus-noise
//!   model ("ARIMA") and a weighted momentum model ("LSTM")
//! - RMSE back-testing over the last seven known closes
//! - Price providers for CSV files, saved Alpha Vantage payloads and
//!   in-memory series
//! - Templated news with a ratio-based sentiment recommendation
//!
//! Noisy models draw from a [`RandomSource`], so a fixed or seeded source
//! makes every result reproducible.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use stock_forecast::{
//!     FixedRandom, ForecastService, InMemoryProvider, ModelKind, PredictionRequest, PriceSeries,
//! };
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let closes: Vec<f64> = (100..=110).map(f64::from).collect();
//! let series = PriceSeries::from_closes("ACME", start, &closes)?;
//!
//! let service = ForecastService::new(InMemoryProvider::new().with_series(series));
//! let request = PredictionRequest::new("ACME", ModelKind::Linear);
//! let result = service.predict_with(&request, &mut FixedRandom::zero_noise())?;
//!
//! assert_eq!(result.predicted_prices[0], 111.0);
//! assert_eq!(result.predicted_dates[0].to_string(), "2024-01-12");
//! # Ok::<(), stock_forecast::ForecastError>(())
//! ```

pub mod backtest;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod news;
pub mod providers;
pub mod random;
pub mod sentiment;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use crate::backtest::{AccuracyRating, BacktestReport, Backtester};
pub use crate::config::ForecastConfig;
pub use crate::data::{DailyBar, PriceSeries, QuoteSummary};
pub use crate::error::{ForecastError, ProviderError};
pub use crate::models::{ForecastModel, ForecastResult, ModelKind, TrainedForecastModel};
pub use crate::news::{MockNewsProvider, NewsItem, NewsProvider, Sentiment};
pub use crate::providers::{InMemoryProvider, StockDataProvider};
pub use crate::random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use crate::sentiment::{
    RatioSentimentEngine, Recommendation, SentimentAnalysis, SentimentEngine,
};
pub use crate::service::{ForecastService, PredictionRequest, PredictionResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
