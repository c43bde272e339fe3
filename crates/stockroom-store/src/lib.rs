//! # stockroom-store: In-Memory Store for Stockroom
//!
//! This crate owns the inventory: the product catalog, the transaction
//! ledger, and the one lock that serializes every mutation of both.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Dashboard command (record_transaction)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (seed.rs)   │  │   │
//! │  │   │               │    │ ProductRepo   │    │              │  │   │
//! │  │   │ SharedState   │◄───│ TransactionRepo    │ Demo catalog │  │   │
//! │  │   │ StoreConfig   │    │ AnalyticsRepo │    │ + 3 sales    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockroom-core (validation, ledger rules, analytics, search)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store creation and repository access
//! - [`config`] - Latency and report settings
//! - [`state`] - The locked inventory state
//! - [`error`] - Store error types
//! - [`repository`] - Product, transaction and analytics repositories
//! - [`seed`] - Demo catalog
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new().seed_demo_data(true))?;
//!
//! let lamps = store.products().search("lamp").await?;
//! let sale = store.transactions().record(NewTransaction::new(&lamps[0].id, 1)).await?;
//! let overview = store.analytics().overview().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;
pub mod seed;
pub mod state;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use state::InventoryState;
pub use store::Store;

pub use repository::analytics::AnalyticsRepository;
pub use repository::product::ProductRepository;
pub use repository::transaction::TransactionRepository;
