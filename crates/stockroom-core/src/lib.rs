//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate holds the inventory domain as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard UI (collaborator)                     │   │
//! │  │    Products table ──► Product form ──► Sales ──► Charts        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Dashboard commands                           │   │
//! │  │    list_products, record_transaction, get_overview, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-store (state + lock)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ analytics │  │  search   │  │   │
//! │  │   │  Product  │  │   Money   │  │ Overview  │  │  match    │  │   │
//! │  │   │Transaction│  │           │  │ LowStock  │  │  sort     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO CLOCK READS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Transaction and their input types
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Product form and sale rules
//! - [`ledger`] - Stock and total checks for a single sale
//! - [`analytics`] - Overview, category breakdown, low-stock report
//! - [`search`] - Substring search, category filter, table sorting
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::analytics::overview;
//! use stockroom_core::types::{NewProduct, Product};
//! use chrono::Utc;
//!
//! let mut widget = Product::from_new(
//!     "p-1",
//!     NewProduct {
//!         name: "Widget".to_string(),
//!         category: "Tools".to_string(),
//!         description: String::new(),
//!         price_cents: 1000,
//!         quantity_in_stock: 5,
//!     },
//!     Utc::now(),
//! );
//! widget.items_sold = 2;
//!
//! assert_eq!(overview(&[widget]).total_revenue.cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod error;
pub mod ledger;
pub mod money;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analytics::{
    CategoryBreakdown, CategoryRevenue, CategoryStock, LowStockItem, Overview, StockLevel,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use search::{ProductQuery, ProductSort, SortDirection, SortField};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest quantity a single sale may record.
///
/// Catches typos such as 10000 for 10. No real order in the catalog comes
/// close.
pub const MAX_SALE_QUANTITY: i64 = 9_999;

/// Highest unit price a product may carry, in cents ($100 000 000.00).
///
/// Combined with [`MAX_SALE_QUANTITY`] a single sale total stays far below
/// `i64::MAX`.
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;

/// Largest stock level a product may hold.
pub const MAX_STOCK_QUANTITY: i64 = 1_000_000_000;

/// Products with fewer units than this show up in the low-stock report.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;
