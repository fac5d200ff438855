//! Daily price history for a single ticker

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One trading day of OHLCV data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Calendar day of the bar
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: u64,
}

impl DailyBar {
    fn validate(&self) -> Result<()> {
        let prices = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (field, value) in prices {
            if !value.is_finite() || value <= 0.0 {
                return Err(ForecastError::DataError(format!(
                    "{} price on {} must be positive, got {}",
                    field, self.date, value
                )));
            }
        }
        Ok(())
    }
}

/// Daily bars for one ticker, always held oldest-first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    ticker: String,
    bars: Vec<DailyBar>,
}

impl PriceSeries {
    /// Build a series from bars in either strictly ascending or strictly
    /// descending date order.
    ///
    /// Newest-first input is reversed. Duplicate dates, mixed ordering and
    /// non-positive prices are rejected.
    pub fn new(ticker: impl Into<String>, mut bars: Vec<DailyBar>) -> Result<Self> {
        let ticker = ticker.into();
        if bars.is_empty() {
            return Err(ForecastError::DataError(format!(
                "Price series for {} is empty",
                ticker
            )));
        }

        for bar in &bars {
            bar.validate()?;
        }

        if bars.len() > 1 {
            let direction = bars[0].date.cmp(&bars[1].date);
            if direction == Ordering::Equal {
                return Err(ForecastError::DataError(format!(
                    "Duplicate date {} in series for {}",
                    bars[0].date, ticker
                )));
            }

            for pair in bars.windows(2) {
                if pair[0].date.cmp(&pair[1].date) != direction {
                    return Err(ForecastError::DataError(format!(
                        "Dates in series for {} are not strictly ordered at {} -> {}",
                        ticker, pair[0].date, pair[1].date
                    )));
                }
            }

            if direction == Ordering::Greater {
                bars.reverse();
            }
        }

        Ok(Self { ticker, bars })
    }

    /// Build a series of consecutive calendar days from close prices alone.
    ///
    /// Open, high and low mirror the close and volume is zero.
    pub fn from_closes(
        ticker: impl Into<String>,
        first_date: NaiveDate,
        closes: &[f64],
    ) -> Result<Self> {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = first_date
                    .checked_add_days(Days::new(i as u64))
                    .ok_or_else(|| {
                        ForecastError::DataError(format!("Date overflow after {}", first_date))
                    })?;
                Ok(DailyBar {
                    date,
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: 0,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(ticker, bars)
    }

    /// Ticker symbol the series belongs to
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Bars, oldest first
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close prices, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.bars[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.bars[self.bars.len() - 1].date
    }

    /// Keep only the newest `days` bars
    pub fn most_recent(&self, days: usize) -> Self {
        let start = self.bars.len().saturating_sub(days.max(1));
        Self {
            ticker: self.ticker.clone(),
            bars: self.bars[start..].to_vec(),
        }
    }

    /// Split close prices into a training prefix and the last `holdout` values
    pub fn split_holdout(&self, holdout: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        if holdout >= self.bars.len() {
            return Err(ForecastError::InsufficientHistory {
                model: "hold-out split".to_string(),
                required: holdout + 1,
                available: self.bars.len(),
            });
        }

        let mut closes = self.closes();
        let held_out = closes.split_off(closes.len() - holdout);
        Ok((closes, held_out))
    }

    /// Day-over-day quote statistics for the newest bar.
    ///
    /// Needs at least two bars and a non-zero volume on the previous day.
    pub fn quote_summary(&self) -> Result<QuoteSummary> {
        let n = self.bars.len();
        if n < 2 {
            return Err(ForecastError::InsufficientHistory {
                model: "quote summary".to_string(),
                required: 2,
                available: n,
            });
        }

        let latest = &self.bars[n - 1];
        let previous = &self.bars[n - 2];
        if previous.volume == 0 {
            return Err(ForecastError::DivisionByZero(format!(
                "No volume for {} on {}",
                self.ticker, previous.date
            )));
        }

        let price_change = latest.close - previous.close;
        let volume_delta = latest.volume as f64 - previous.volume as f64;
        let total_volume: f64 = self.bars.iter().map(|bar| bar.volume as f64).sum();

        Ok(QuoteSummary {
            date: latest.date,
            close: latest.close,
            price_change,
            percent_change: price_change / previous.close * 100.0,
            volume: latest.volume,
            volume_change_percent: volume_delta / previous.volume as f64 * 100.0,
            intraday_volatility_percent: (latest.high - latest.low) / latest.close * 100.0,
            average_volume: total_volume / n as f64,
        })
    }
}

/// Headline numbers for the newest trading day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub date: NaiveDate,
    pub close: f64,
    /// Close minus the previous close
    pub price_change: f64,
    pub percent_change: f64,
    pub volume: u64,
    pub volume_change_percent: f64,
    /// High-low range as a percentage of the close
    pub intraday_volatility_percent: f64,
    /// Mean volume over the whole series
    pub average_volume: f64,
}

impl QuoteSummary {
    /// True when the close did not fall
    pub fn is_up(&self) -> bool {
        self.price_change >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> DailyBar {
        DailyBar {
            date: date.parse().unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_newest_first_is_reversed() {
        let series = PriceSeries::new(
            "AAPL",
            vec![
                bar("2024-03-06", 12.0),
                bar("2024-03-05", 11.0),
                bar("2024-03-04", 10.0),
            ],
        )
        .unwrap();

        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
        assert_eq!(series.first_date().to_string(), "2024-03-04");
        assert_eq!(series.last_date().to_string(), "2024-03-06");
    }

    #[test]
    fn test_rejects_unordered_and_duplicates() {
        let mixed = vec![
            bar("2024-03-04", 10.0),
            bar("2024-03-06", 11.0),
            bar("2024-03-05", 12.0),
        ];
        assert!(PriceSeries::new("AAPL", mixed).is_err());

        let duplicate = vec![bar("2024-03-04", 10.0), bar("2024-03-04", 11.0)];
        assert!(PriceSeries::new("AAPL", duplicate).is_err());
    }

    #[test]
    fn test_rejects_bad_prices() {
        assert!(PriceSeries::new("AAPL", vec![bar("2024-03-04", 0.0)]).is_err());
        assert!(PriceSeries::new("AAPL", vec![bar("2024-03-04", f64::NAN)]).is_err());
        assert!(PriceSeries::new("AAPL", Vec::new()).is_err());
    }

    #[test]
    fn test_most_recent_and_holdout() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let closes: Vec<f64> = (1..=10).map(f64::from).collect();
        let series = PriceSeries::from_closes("MSFT", start, &closes).unwrap();

        let recent = series.most_recent(4);
        assert_eq!(recent.closes(), vec![7.0, 8.0, 9.0, 10.0]);
        assert_eq!(recent.last_date(), series.last_date());

        let (train, test) = series.split_holdout(3).unwrap();
        assert_eq!(train.len(), 7);
        assert_eq!(test, vec![8.0, 9.0, 10.0]);

        assert!(series.split_holdout(10).is_err());
    }

    #[test]
    fn test_quote_summary() {
        let mut latest = bar("2024-03-05", 110.0);
        latest.high = 112.2;
        latest.low = 106.7;
        latest.volume = 1_500;
        let series = PriceSeries::new(
            "AAPL",
            vec![bar("2024-03-03", 95.0), bar("2024-03-04", 100.0), latest],
        )
        .unwrap();
        let summary = series.quote_summary().unwrap();

        assert_eq!(summary.date.to_string(), "2024-03-05");
        assert_eq!(summary.price_change, 10.0);
        assert!((summary.percent_change - 10.0).abs() < 1e-9);
        assert!((summary.volume_change_percent - 50.0).abs() < 1e-9);
        assert!((summary.intraday_volatility_percent - 5.0).abs() < 1e-9);
        assert!((summary.average_volume - 3_500.0 / 3.0).abs() < 1e-9);
        assert!(summary.is_up());
    }

    #[test]
    fn test_quote_summary_falling_day() {
        let series = PriceSeries::new(
            "AAPL",
            vec![bar("2024-03-04", 100.0), bar("2024-03-05", 98.0)],
        )
        .unwrap();
        let summary = series.quote_summary().unwrap();

        assert_eq!(summary.price_change, -2.0);
        assert!((summary.percent_change + 2.0).abs() < 1e-9);
        assert_eq!(summary.volume_change_percent, 0.0);
        assert!(!summary.is_up());
    }

    #[test]
    fn test_quote_summary_edges() {
        let single = PriceSeries::new("AAPL", vec![bar("2024-03-04", 100.0)]).unwrap();
        assert!(matches!(
            single.quote_summary(),
            Err(ForecastError::InsufficientHistory {
                required: 2,
                available: 1,
                ..
            })
        ));

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let no_volume = PriceSeries::from_closes("AAPL", start, &[10.0, 11.0]).unwrap();
        assert!(matches!(
            no_volume.quote_summary(),
            Err(ForecastError::DivisionByZero(_))
        ));
    }
}
