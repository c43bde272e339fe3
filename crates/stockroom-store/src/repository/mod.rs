//! # Repository Module
//!
//! Repository implementations over the shared inventory state.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard command                                                      │
//! │       │                                                                 │
//! │       │  store.products().search("lamp")                                │
//! │       ▼                                                                 │
//! │  ProductRepository ─┐                                                   │
//! │  TransactionRepo ───┼──► SharedState (Arc<Mutex<InventoryState>>)       │
//! │  AnalyticsRepo ─────┘                                                   │
//! │                                                                         │
//! │  Repositories are cheap clones of the same handle.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD, search, queries
//! - [`TransactionRepository`](transaction::TransactionRepository) - Sales ledger
//! - [`AnalyticsRepository`](analytics::AnalyticsRepository) - Overview and reports

pub mod analytics;
pub mod product;
pub mod transaction;
