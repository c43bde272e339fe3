//! # Store State
//!
//! Wraps the `Store` for use in dashboard commands.
//!
//! ## Thread Safety
//! `Store` is a cheap clone over one `Arc<Mutex<_>>`. Commands may run
//! concurrently; the store serializes their mutations internally.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! async fn list_products(state: &StoreState) -> Result<Vec<ProductDto>, ApiError> {
//!     let products = state.inner().products().list().await;
//!     Ok(products.into_iter().map(ProductDto::from).collect())
//! }
//! ```

use stockroom_store::Store;

/// Wrapper around `Store` handed to every command.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Creates a new StoreState wrapping the store.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
