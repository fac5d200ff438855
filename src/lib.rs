//! # Stock Forecast Workspace
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`price_math`]: trend-line fitting, weighted averages and error metrics
//! - [`stock_forecast`]: price series, forecasting models, back-testing,
//!   providers and news sentiment
//!
//! ## Example
//!
//! ```
//! use stock_forecast_workspace::price_math::LinearFit;
//! use stock_forecast_workspace::stock_forecast::{FixedRandom, ModelKind};
//!
//! let prices = [10.0, 11.0, 12.0, 13.0];
//! let fit = LinearFit::over_index(&prices).unwrap();
//! assert_eq!(fit.extrapolate(1).round(), 14.0);
//!
//! let forecast = ModelKind::Linear
//!     .forecast(&prices, 2, &mut FixedRandom::zero_noise())
//!     .unwrap();
//! assert_eq!(forecast.values(), &[14.0, 15.0]);
//! ```

pub use price_math;
pub use stock_forecast;
