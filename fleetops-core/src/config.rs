//! Serializable analytics configuration.
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! reproduces the stock behaviour: 3-sample trend windows and a ±5% noise
//! band.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub trend: TrendConfig,
    pub profit: ProfitConfig,
}

/// Trend classifier parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Samples per comparison window.
    pub window: usize,
    /// Percent change that must be exceeded (either direction) to leave `stable`.
    pub threshold_pct: f64,
    /// Compare against a baseline shorter than one window when the series
    /// has fewer than two full windows. Off by default: series of 3 to 5
    /// samples then stay `stable`.
    pub partial_prior_window: bool,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 3,
            threshold_pct: 5.0,
            partial_prior_window: false,
        }
    }
}

impl TrendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::Invalid {
                field: "trend.window",
                reason: "must be at least 1".into(),
            });
        }
        if !self.threshold_pct.is_finite() || self.threshold_pct < 0.0 {
            return Err(ConfigError::Invalid {
                field: "trend.threshold_pct",
                reason: format!("must be finite and >= 0, got {}", self.threshold_pct),
            });
        }
        Ok(())
    }
}

/// Cost inputs for profit projections.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitConfig {
    /// Operating cost per mile for the vehicle.
    pub cost_per_mile: f64,
}

impl ProfitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cost_per_mile.is_finite() || self.cost_per_mile < 0.0 {
            return Err(ConfigError::Invalid {
                field: "profit.cost_per_mile",
                reason: format!("must be finite and >= 0, got {}", self.cost_per_mile),
            });
        }
        Ok(())
    }
}

impl AnalyticsConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trend.validate()?;
        self.profit.validate()
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
