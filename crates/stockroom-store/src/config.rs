//! # Store Configuration
//!
//! Simulated latency and report settings for the store.
//!
//! The dashboard's mock backend answered reads after ~300 ms and writes
//! after ~500 ms. The defaults keep that feel for demos; tests use
//! [`StoreConfig::instant`].

use std::time::Duration;

use stockroom_core::DEFAULT_LOW_STOCK_THRESHOLD;

use crate::error::{StoreError, StoreResult};

/// Store configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .read_latency(Duration::from_millis(50))
///     .low_stock_threshold(5)
///     .seed_demo_data(true);
///
/// assert_eq!(config.low_stock_threshold, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Delay before every read.
    /// Default: 300 ms
    pub read_latency: Duration,

    /// Delay before every mutation.
    /// Default: 500 ms
    pub write_latency: Duration,

    /// Products with fewer units appear in the low-stock report.
    /// Default: 10
    pub low_stock_threshold: i64,

    /// Whether to load the demo catalog on startup.
    /// Default: false
    pub seed_demo_data: bool,
}

impl StoreConfig {
    /// Creates a configuration with the default latencies.
    pub fn new() -> Self {
        StoreConfig {
            read_latency: Duration::from_millis(300),
            write_latency: Duration::from_millis(500),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed_demo_data: false,
        }
    }

    /// Creates a zero-latency configuration (for testing).
    ///
    /// ## Usage
    /// ```rust
    /// use stockroom_store::{Store, StoreConfig};
    ///
    /// let store = Store::new(StoreConfig::instant()).unwrap();
    /// assert!(store.config().read_latency.is_zero());
    /// ```
    pub fn instant() -> Self {
        StoreConfig {
            read_latency: Duration::ZERO,
            write_latency: Duration::ZERO,
            ..StoreConfig::new()
        }
    }

    /// Sets the read latency.
    pub fn read_latency(mut self, latency: Duration) -> Self {
        self.read_latency = latency;
        self
    }

    /// Sets the write latency.
    pub fn write_latency(mut self, latency: Duration) -> Self {
        self.write_latency = latency;
        self
    }

    /// Sets the low-stock threshold.
    pub fn low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Sets whether to load the demo catalog.
    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Checks the configuration before a store is built from it.
    pub fn validate(&self) -> StoreResult<()> {
        if self.low_stock_threshold < 1 {
            return Err(StoreError::InvalidConfig(format!(
                "low_stock_threshold must be at least 1, got {}",
                self.low_stock_threshold
            )));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
