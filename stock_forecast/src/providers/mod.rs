//! Sources of daily price history

use crate::data::PriceSeries;
use crate::error::{ForecastError, ProviderError};
use std::collections::HashMap;

pub mod alpha_vantage;
pub mod csv_file;

pub use alpha_vantage::AlphaVantageFileProvider;
pub use csv_file::CsvPriceProvider;

/// Supplies daily price history for a ticker
pub trait StockDataProvider {
    fn fetch(&self, ticker: &str) -> Result<PriceSeries, ProviderError>;
}

impl<P: StockDataProvider + ?Sized> StockDataProvider for &P {
    fn fetch(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        (**self).fetch(ticker)
    }
}

/// Upper-case a ticker and reject anything that is not a plain symbol.
///
/// Symbols may contain letters, digits, `.`, `-` and `^`.
pub fn normalize_ticker(ticker: &str) -> Result<String, ProviderError> {
    let symbol = ticker.trim().to_ascii_uppercase();
    let valid = !symbol.is_empty()
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'));

    if valid {
        Ok(symbol)
    } else {
        Err(ProviderError::NotFound(ticker.to_string()))
    }
}

/// A decoded payload that fails series validation is a parse failure
pub(crate) fn invalid_series(err: ForecastError) -> ProviderError {
    match err {
        ForecastError::DataError(message) => ProviderError::Parse(message),
        other => ProviderError::Parse(other.to_string()),
    }
}

/// Series held in memory, keyed by upper-case ticker
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `series` under its own ticker
    pub fn insert(&mut self, series: PriceSeries) {
        self.series.insert(series.ticker().to_ascii_uppercase(), series);
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }
}

impl StockDataProvider for InMemoryProvider {
    fn fetch(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let symbol = normalize_ticker(ticker)?;
        self.series
            .get(&symbol)
            .cloned()
            .ok_or(ProviderError::NotFound(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(normalize_ticker(" aapl ").unwrap(), "AAPL");
        assert_eq!(normalize_ticker("brk.b").unwrap(), "BRK.B");
        assert_eq!(normalize_ticker("^gspc").unwrap(), "^GSPC");
        assert!(normalize_ticker("").is_err());
        assert!(normalize_ticker("../etc/passwd").is_err());
    }

    #[test]
    fn test_in_memory_lookup_is_case_insensitive() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = PriceSeries::from_closes("MSFT", start, &[1.0, 2.0]).unwrap();
        let provider = InMemoryProvider::new().with_series(series.clone());

        assert_eq!(provider.fetch("msft").unwrap(), series);
        assert_eq!(
            provider.fetch("IBM"),
            Err(ProviderError::NotFound("IBM".to_string()))
        );
    }
}
