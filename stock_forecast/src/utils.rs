//! Utility functions for the stock_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};

/// Calendar days following `last_date`, one per forecast step.
///
/// Weekends and holidays are not skipped.
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon as u64)
        .map(|offset| {
            last_date.checked_add_days(Days::new(offset)).ok_or_else(|| {
                ForecastError::DataError(format!(
                    "Cannot project {} days past {}",
                    offset, last_date
                ))
            })
        })
        .collect()
}
