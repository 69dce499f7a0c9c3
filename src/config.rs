//! Configuration management for the RiskDesk client.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file (JSON)
//! 3. Default values

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::retry::RetryOptions;

/// Fallback backend base URL when `RISKDESK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings.
    pub api: ApiSection,
    /// Default retry behavior for wrapped calls.
    pub retry: RetrySection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Backend connection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Base URL of the RiskDesk backend.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Retry behavior section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySection {
    /// Maximum retry attempts after the initial call.
    pub max_retries: u32,
    /// Backoff before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Ceiling on any single wait, in milliseconds.
    pub max_delay_ms: u64,
    /// Honor the server's `Retry-After` hint.
    pub respect_retry_after: bool,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 10000,
            respect_retry_after: true,
        }
    }
}

impl RetrySection {
    /// Convert to the options consumed by the retry wrapper.
    pub fn to_options(&self) -> RetryOptions {
        RetryOptions {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            respect_retry_after: self.respect_retry_after,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("RISKDESK_API_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }

        if let Ok(timeout) = std::env::var("RISKDESK_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                self.api.timeout_secs = timeout;
            }
        }

        if let Ok(retries) = std::env::var("RISKDESK_MAX_RETRIES") {
            if let Ok(retries) = retries.parse() {
                self.retry.max_retries = retries;
            }
        }

        if let Ok(level) = std::env::var("RISKDESK_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: env vars > config file > defaults
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env();

        if config.api.base_url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl(config.api.base_url));
        }

        Ok(config)
    }

    /// Per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Empty or unusable base URL.
    InvalidBaseUrl(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::InvalidBaseUrl(url) => write!(f, "invalid base URL: {:?}", url),
        }
    }
}

impl std::error::Error for ConfigError {}
