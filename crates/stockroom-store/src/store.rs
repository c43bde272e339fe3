//! # Store Handle
//!
//! Creation of the in-memory store and access to its repositories.
//!
//! ## Startup
//! ```text
//! StoreConfig::new() ─► .seed_demo_data(true) ─► Store::new(config)
//!                                                    │
//!                                  validate config ◄─┤
//!                                  demo catalog?   ◄─┤
//!                                                    ▼
//!                        Store { SharedState, config }  (Clone, Send, Sync)
//! ```

use tracing::info;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::repository::analytics::AnalyticsRepository;
use crate::repository::product::ProductRepository;
use crate::repository::transaction::TransactionRepository;
use crate::seed;
use crate::state::{InventoryState, SharedState};

/// Main store handle providing repository access.
///
/// Clones share the same state.
///
/// ## Usage in Commands
/// ```rust,ignore
/// async fn search_products(
///     state: &StoreState,
///     query: String,
/// ) -> Result<Vec<ProductDto>, ApiError> {
///     let products = state.inner().products().search(&query).await?;
///     Ok(products.into_iter().map(ProductDto::from).collect())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    state: SharedState,
    config: StoreConfig,
}

impl Store {
    /// Creates a store, loading the demo catalog if configured.
    ///
    /// ## Returns
    /// * `Ok(Store)` - Ready-to-use store
    /// * `Err(StoreError::InvalidConfig)` - Configuration rejected
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_store::{Store, StoreConfig};
    ///
    /// let store = Store::new(StoreConfig::instant()).unwrap();
    /// assert!(!store.config().seed_demo_data);
    /// ```
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let initial = if config.seed_demo_data {
            seed::demo_state()
        } else {
            InventoryState::new()
        };

        info!(
            products = initial.products().len(),
            transactions = initial.transactions().len(),
            read_latency_ms = config.read_latency.as_millis() as u64,
            write_latency_ms = config.write_latency.as_millis() as u64,
            "Inventory store initialized"
        );

        Ok(Store {
            state: SharedState::new(initial, &config),
            config,
        })
    }

    /// Returns the configuration the store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = store.products().search("lamp").await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.state.clone())
    }

    /// Returns the transaction ledger.
    pub fn transactions(&self) -> TransactionRepository {
        TransactionRepository::new(self.state.clone())
    }

    /// Returns the analytics repository.
    pub fn analytics(&self) -> AnalyticsRepository {
        AnalyticsRepository::new(self.state.clone(), self.config.low_stock_threshold)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
