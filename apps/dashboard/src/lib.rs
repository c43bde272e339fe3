//! # Stockroom Dashboard Library
//!
//! Command layer of the inventory dashboard. Pages call the functions in
//! [`commands`] with a shared [`StoreState`] and render the returned DTOs.
//!
//! ## Module Organization
//! ```text
//! stockroom_dashboard/
//! ├── lib.rs          ◄─── You are here (tracing & state setup)
//! ├── config.rs       ◄─── Environment configuration
//! ├── state.rs        ◄─── Store state wrapper
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product CRUD/search commands
//! │   ├── transaction.rs ◄─ Sale recording commands
//! │   └── analytics.rs ◄── Dashboard statistics commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. DashboardConfig::load()     STOCKROOM_* variables                   │
//! │  2. init_tracing(filter)        RUST_LOG overrides the configured one   │
//! │  3. build_state(&config)        Store with latency, seeded catalog      │
//! │  4. commands::*                 Pages share one StoreState              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stockroom_store::{Store, StoreResult};

pub use config::{ConfigError, DashboardConfig};
pub use error::{ApiError, ErrorCode};
pub use state::StoreState;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: `default_filter`
///
/// A subscriber installed earlier (tests, embedding apps) stays in place;
/// the conflict is reported through it.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        debug!(error = %e, "Tracing subscriber already installed");
    }
}

/// Builds the shared store state from configuration.
///
/// ## Returns
/// * `Ok(StoreState)` - Ready for commands
/// * `Err(StoreError::InvalidConfig)` - Threshold below 1
pub fn build_state(config: &DashboardConfig) -> StoreResult<StoreState> {
    let store = Store::new(config.store_config())?;
    info!(
        seeded = config.seed_demo_data,
        read_latency_ms = config.read_latency_ms,
        write_latency_ms = config.write_latency_ms,
        "Store state initialized"
    );
    Ok(StoreState::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_state_from_config() {
        let config = DashboardConfig {
            read_latency_ms: 0,
            write_latency_ms: 0,
            low_stock_threshold: 20,
            seed_demo_data: true,
            log_filter: config::DEFAULT_LOG_FILTER.to_string(),
        };
        init_tracing(&config.log_filter);
        // A second call finds the subscriber above and keeps it
        init_tracing("warn");

        let state = build_state(&config).unwrap();
        let low = commands::analytics::get_low_stock(&state).await.unwrap();

        // Office Chair 8, Desk Lamp 18, Coffee Maker 12, Laptop 15
        assert_eq!(low.len(), 4);
        assert_eq!(low[0].name, "Office Chair");
    }

    #[test]
    fn test_build_state_rejects_bad_threshold() {
        let config = DashboardConfig {
            read_latency_ms: 0,
            write_latency_ms: 0,
            low_stock_threshold: 0,
            seed_demo_data: false,
            log_filter: String::new(),
        };
        assert!(build_state(&config).is_err());
    }
}
