//! Configuration management for the birthday assistant.
//!
//! This module loads configuration from environment variables, reading an
//! optional `.env` file first. Configuration only affects diagnostics on stderr;
//! nothing here changes how commands behave or writes to stdout, which belongs
//! to the REPL transcript.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the birthday assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level or filter directive (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level or filter directive (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if EnvFilter::try_new(&log_level).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Not a valid log filter, got: {}", log_level),
            });
        }

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}
