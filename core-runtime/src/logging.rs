//! # Logging & Tracing Infrastructure
//!
//! Configures the `tracing-subscriber` stack for hosts embedding the admin
//! core, supporting:
//! - Pretty, JSON, and compact output formats
//! - Module-level filtering via `RUST_LOG` or an explicit directive
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::default().with_format(LogFormat::Compact);
//! init_logging(config).expect("Failed to initialize logging");
//!
//! tracing::info!("Admin core started");
//! ```

use crate::error::{Error, Result};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"info"` or
    /// `"core_admin=debug,info"`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter directive.
///
/// # Errors
///
/// Returns [`Error::Logging`] when the filter directive is malformed or a
/// global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| Error::Logging(format!("invalid filter directive: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
    };

    result.map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(format = ?config.format, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn test_builder_overrides() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_filter("core_admin=debug");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "core_admin=debug");
    }

    #[test]
    fn test_second_init_fails() {
        // First call may fail if another test installed a subscriber; the
        // second call must fail either way.
        let _ = init_logging(LoggingConfig::default());
        assert!(init_logging(LoggingConfig::default()).is_err());
    }
}
