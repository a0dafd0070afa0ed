//! Runtime configuration read from the environment (and an optional `.env` file).

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_FILTER_VAR: &str = "CIVICPULSE_LOG";
/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "CIVICPULSE_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines on stderr
    #[default]
    Pretty,
    /// Bunyan-style JSON records on stderr
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the `CIVICPULSE_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars()
    }

    /// Reads the process environment only, without touching `.env`.
    pub fn from_vars() -> Result<Self> {
        let log_filter = env::var(LOG_FILTER_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match env::var(LOG_FORMAT_VAR) {
            Ok(value) => value.parse()?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(AppError::Config(format!("{} is not valid UTF-8", LOG_FORMAT_VAR)))
            }
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}
