//! Dashboard configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                        | Default                 |
//! |---------------------------------|-------------------------|
//! | `STOCKROOM_READ_LATENCY_MS`     | `300`                   |
//! | `STOCKROOM_WRITE_LATENCY_MS`    | `500`                   |
//! | `STOCKROOM_LOW_STOCK_THRESHOLD` | `10`                    |
//! | `STOCKROOM_SEED_DEMO_DATA`      | `true`                  |
//! | `STOCKROOM_LOG`                 | `info,stockroom=debug`  |
//!
//! `RUST_LOG`, when set, wins over `STOCKROOM_LOG`.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use stockroom_store::StoreConfig;

pub const DEFAULT_LOG_FILTER: &str = "info,stockroom=debug";

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Simulated delay before reads, in milliseconds
    pub read_latency_ms: u64,

    /// Simulated delay before writes, in milliseconds
    pub write_latency_ms: u64,

    /// Stock level below which a product is reported as low
    pub low_stock_threshold: i64,

    /// Start with the demo catalog
    pub seed_demo_data: bool,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through a custom variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = DashboardConfig {
            read_latency_ms: parse_var(&lookup, "STOCKROOM_READ_LATENCY_MS", 300)?,
            write_latency_ms: parse_var(&lookup, "STOCKROOM_WRITE_LATENCY_MS", 500)?,
            low_stock_threshold: parse_var(
                &lookup,
                "STOCKROOM_LOW_STOCK_THRESHOLD",
                stockroom_core::DEFAULT_LOW_STOCK_THRESHOLD,
            )?,
            seed_demo_data: parse_var(&lookup, "STOCKROOM_SEED_DEMO_DATA", true)?,
            log_filter: lookup("STOCKROOM_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        if config.low_stock_threshold < 1 {
            return Err(ConfigError::InvalidValue(
                "STOCKROOM_LOW_STOCK_THRESHOLD".to_string(),
            ));
        }

        Ok(config)
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new()
            .read_latency(Duration::from_millis(self.read_latency_ms))
            .write_latency(Duration::from_millis(self.write_latency_ms))
            .low_stock_threshold(self.low_stock_threshold)
            .seed_demo_data(self.seed_demo_data)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
