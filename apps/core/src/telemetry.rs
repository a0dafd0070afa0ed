//! Tracing subscriber setup for the binary.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};
use crate::error::{AppError, Result};

const SERVICE_NAME: &str = "civicpulse";

/// Installs the global subscriber. All output goes to stderr so stdout stays
/// reserved for JSON results.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let installed = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(SERVICE_NAME.to_string(), std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| AppError::Internal(format!("failed to install tracing subscriber: {}", e)))
}
