//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the API credentials (`STAYRATE_ACCESS_TOKEN`, `STAYRATE_REFRESH_TOKEN`).

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Remote listings API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Token refresh endpoint, relative to `base_url`.
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/".into()
}

const fn default_timeout_secs() -> u64 {
    15
}

fn default_refresh_path() -> String {
    "auth/token/refresh/".into()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            refresh_path: default_refresh_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Display settings for rendered quotes.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Prefix for amounts in `quote` and `rules` output. Event titles always read
    /// `Rate ${price}`, the format the calendar widget matches on.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".into()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Bearer credentials. Loaded from the environment at runtime, never from the config file.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            access_token: std::env::var("STAYRATE_ACCESS_TOKEN").ok(),
            refresh_token: std::env::var("STAYRATE_REFRESH_TOKEN").ok(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;
        config.credentials = Credentials::from_env();
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if let Err(e) = Url::parse(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected pretty or json, got {}", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
            _ => {
                fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api/");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.calendar.currency_symbol, "$");
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = Config::parse("[api]\nbase_url = \"listings/api\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "base_url", .. }))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let result = Config::parse("[api]\ntimeout_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "timeout_secs",
                ..
            }))
        ));
    }
}
