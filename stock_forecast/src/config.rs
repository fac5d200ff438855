//! Forecast service settings

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_horizon() -> usize {
    7
}

fn default_holdout() -> usize {
    7
}

fn default_history_days() -> usize {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Calendar days predicted past the last known date
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// Trailing prices held out for the RMSE back-test
    #[serde(default = "default_holdout")]
    pub holdout: usize,
    /// Newest records kept from the provider's series
    #[serde(default = "default_history_days")]
    pub history_days: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            holdout: default_holdout(),
            history_days: default_history_days(),
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ForecastConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file at `path`.
    ///
    /// Read failures surface as `ForecastError::Io`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::Config("horizon must be at least 1".into()));
        }
        if self.holdout == 0 {
            return Err(ForecastError::Config("holdout must be at least 1".into()));
        }
        if self.history_days < self.holdout + 2 {
            return Err(ForecastError::Config(format!(
                "history_days ({}) must be at least holdout + 2 ({})",
                self.history_days,
                self.holdout + 2
            )));
        }
        Ok(())
    }
}
