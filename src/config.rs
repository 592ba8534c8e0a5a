//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use thiserror::Error;

use crate::cache::DEFAULT_TTL_MS;

/// Default interval between background sweep runs, in seconds.
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;

// == Config Error ==
/// Error raised when an environment variable is present but malformed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The variable was set to a value that does not parse as an integer
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

// == Config ==
/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in milliseconds applied when a write gives no explicit TTL
    pub default_ttl_ms: u64,
    /// Background sweep interval in seconds
    pub cleanup_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset variables fall back to their defaults; a variable that is set
    /// but does not parse is an error.
    ///
    /// # Environment Variables
    /// - `FETCH_CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 60000)
    /// - `FETCH_CACHE_CLEANUP_INTERVAL_SECS` - Sweep frequency in seconds (default: 300)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            default_ttl_ms: read_var("FETCH_CACHE_DEFAULT_TTL_MS", DEFAULT_TTL_MS)?,
            cleanup_interval_secs: read_var(
                "FETCH_CACHE_CLEANUP_INTERVAL_SECS",
                DEFAULT_CLEANUP_INTERVAL_SECS,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            cleanup_interval_secs: DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}

fn read_var(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(default),
    }
}
