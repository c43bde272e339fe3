//! # Dashboard Commands Module
//!
//! All operations exposed to the dashboard pages.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── product.rs      ◄─── Product CRUD, search, category filter, sorting
//! ├── transaction.rs  ◄─── Recording sales, sales history
//! └── analytics.rs    ◄─── Overview totals, category charts, low stock
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Page handler                                                           │
//! │  ────────────                                                           │
//! │  search_products(&state, "lamp".into()).await                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  async fn search_products(                                              │
//! │      state: &StoreState,    ◄── Shared store handle                    │
//! │      query: String,         ◄── Raw input from the search box          │
//! │  ) -> Result<Vec<ProductDto>, ApiError>                                 │
//! │         │                                                               │
//! │         │ (JSON serialization, camelCase)                               │
//! │         ▼                                                               │
//! │  Page receives: ProductDto[]                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns `Result<T, ApiError>` so the pages can switch on
//! `error.code` without caring which layer failed.

pub mod analytics;
pub mod product;
pub mod transaction;
