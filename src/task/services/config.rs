//! Store configuration.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`StoreConfig`].
    #[error("failed to parse store configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for [`TaskStore`](super::TaskStore).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use taskboard::task::services::StoreConfig;
///
/// let config = StoreConfig::from_json_str(r#"{ "forecastHorizonWeeks": 8 }"#)
///     .expect("valid configuration");
/// assert_eq!(config.forecast_horizon_weeks, 8);
/// assert_eq!(config.activity_capacity, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreConfig {
    /// Maximum number of activity entries retained, newest first.
    pub activity_capacity: usize,
    /// Number of weeks projected by the store's revenue forecast.
    pub forecast_horizon_weeks: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            activity_capacity: 50,
            forecast_horizon_weeks: 4,
        }
    }
}

impl StoreConfig {
    /// Configuration that keeps no activity history.
    #[must_use]
    pub fn without_activity() -> Self {
        Self {
            activity_capacity: 0,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, wrongly typed
    /// values, or unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
