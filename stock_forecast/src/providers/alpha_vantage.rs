//! Alpha Vantage `TIME_SERIES_DAILY` payloads
//!
//! Only the decoding is handled here; fetching the payload is left to the
//! caller. Prices arrive as strings keyed by numbered field names:
//!
//! ```json
//! {
//!   "Time Series (Daily)": {
//!     "2024-03-06": {
//!       "1. open": "170.1", "2. high": "171.0", "3. low": "168.9",
//!       "4. close": "169.5", "5. volume": "51000000"
//!     }
//!   }
//! }
//! ```

use crate::data::{DailyBar, PriceSeries};
use crate::error::ProviderError;
use crate::providers::{invalid_series, normalize_ticker, StockDataProvider};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct DailyResponse {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<BTreeMap<String, RawBar>>,
}

#[derive(Debug, Deserialize)]
struct RawBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

fn parse_field<T: FromStr>(date: &str, field: &str, raw: &str) -> Result<T, ProviderError> {
    raw.trim().parse::<T>().map_err(|_| {
        ProviderError::Parse(format!("{} on {} is not a number: {:?}", field, date, raw))
    })
}

impl RawBar {
    fn into_bar(self, date: &str) -> Result<DailyBar, ProviderError> {
        let day = date
            .parse::<NaiveDate>()
            .map_err(|e| ProviderError::Parse(format!("bad date {:?}: {}", date, e)))?;

        Ok(DailyBar {
            date: day,
            open: parse_field(date, "open", &self.open)?,
            high: parse_field(date, "high", &self.high)?,
            low: parse_field(date, "low", &self.low)?,
            close: parse_field(date, "close", &self.close)?,
            volume: parse_field(date, "volume", &self.volume)?,
        })
    }
}

/// Decode a daily time-series payload, keeping the newest `max_days` dates.
///
/// The returned series is oldest-first.
pub fn parse_daily(
    ticker: &str,
    json: &str,
    max_days: usize,
) -> Result<PriceSeries, ProviderError> {
    let response: DailyResponse =
        serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;

    if let Some(message) = response.error_message {
        debug!(ticker, %message, "alpha vantage rejected ticker");
        return Err(ProviderError::NotFound(ticker.to_string()));
    }
    if let Some(notice) = response.note.or(response.information) {
        return Err(ProviderError::RateLimited(notice));
    }

    let time_series = match response.time_series {
        Some(series) if !series.is_empty() => series,
        _ => return Err(ProviderError::NotFound(ticker.to_string())),
    };

    let skip = time_series.len().saturating_sub(max_days.max(1));
    let bars = time_series
        .into_iter()
        .skip(skip)
        .map(|(date, raw)| raw.into_bar(&date))
        .collect::<Result<Vec<_>, _>>()?;

    PriceSeries::new(ticker, bars).map_err(invalid_series)
}

/// Serves saved payloads from `<dir>/<TICKER>.json`
#[derive(Debug, Clone)]
pub struct AlphaVantageFileProvider {
    dir: PathBuf,
    max_days: usize,
}

impl AlphaVantageFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_days: 30,
        }
    }

    /// Keep at most `max_days` of the newest dates
    pub fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days;
        self
    }
}

impl StockDataProvider for AlphaVantageFileProvider {
    fn fetch(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let symbol = normalize_ticker(ticker)?;
        let path = self.dir.join(format!("{}.json", symbol));

        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProviderError::NotFound(symbol.clone()),
            _ => {
                warn!(path = %path.display(), error = %e, "failed to read payload");
                ProviderError::Network(format!("{}: {}", path.display(), e))
            }
        })?;

        parse_daily(&symbol, &json, self.max_days)
    }
}
