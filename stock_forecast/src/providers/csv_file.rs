//! Daily bars read from per-ticker CSV files

use crate::data::{DailyBar, PriceSeries};
use crate::error::ProviderError;
use crate::providers::{invalid_series, normalize_ticker, StockDataProvider};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads `<dir>/<TICKER>.csv` with header `date,open,high,low,close,volume`.
///
/// Rows may be newest-first or oldest-first.
#[derive(Debug, Clone)]
pub struct CsvPriceProvider {
    dir: PathBuf,
}

impl CsvPriceProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Parse CSV text into a series for `ticker`.
    ///
    /// Failures to read from `reader` are `Network`, malformed rows `Parse`.
    pub fn parse<R: Read>(ticker: &str, reader: R) -> Result<PriceSeries, ProviderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let to_provider_error = |e: csv::Error| {
            if e.is_io_error() {
                ProviderError::Network(format!("{}: {}", ticker, e))
            } else {
                ProviderError::Parse(format!("{}: {}", ticker, e))
            }
        };

        csv_reader.headers().map_err(to_provider_error)?;
        let bars = csv_reader
            .deserialize::<DailyBar>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_provider_error)?;

        PriceSeries::new(ticker, bars).map_err(invalid_series)
    }
}

impl StockDataProvider for CsvPriceProvider {
    fn fetch(&self, ticker: &str) -> Result<PriceSeries, ProviderError> {
        let symbol = normalize_ticker(ticker)?;
        let path = self.dir.join(format!("{}.csv", symbol));

        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProviderError::NotFound(symbol.clone()),
            _ => {
                warn!(path = %path.display(), error = %e, "failed to open price file");
                ProviderError::Network(format!("{}: {}", path.display(), e))
            }
        })?;

        let series = Self::parse(&symbol, file)?;
        debug!(ticker = %symbol, bars = series.len(), "loaded prices from csv");
        Ok(series)
    }
}
