//! Configuration loading from environment variables.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use charolis_observability::{LogFormat, ParseLogFormatError};

pub const ENV_LOG_FORMAT: &str = "CHAROLIS_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "CHAROLIS_OUTPUT";
pub const ENV_CURRENCY: &str = "CHAROLIS_CURRENCY";

const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CHAROLIS_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("CHAROLIS_OUTPUT: unknown output format {0:?} (expected \"text\" or \"json\")")]
    Output(String),

    #[error("CHAROLIS_CURRENCY: currency symbol cannot be empty")]
    EmptyCurrency,
}

/// How entities are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Output(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    pub currency: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_CURRENCY) {
            let symbol = raw.trim();
            if symbol.is_empty() {
                return Err(ConfigError::EmptyCurrency);
            }
            config.currency = symbol.to_string();
        }

        Ok(config)
    }
}
