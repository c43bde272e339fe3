//! # Inventory State
//!
//! The products and the transaction ledger, and the single lock that
//! guards both.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  One Writer, Many Waiters                               │
//! │                                                                         │
//! │  record_transaction ─┐                                                  │
//! │  update_product ─────┼─► sleep(latency) ─► lock ─► f(&mut state) ─► unlock
//! │  get_overview ───────┘    (no lock held)    ▲                           │
//! │                                             │                           │
//! │                        tokio::sync::Mutex<InventoryState>               │
//! │                                                                         │
//! │  A check-then-mutate sequence (stock check → decrement → append) runs   │
//! │  inside one closure, so no other call can interleave with it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use stockroom_core::{Product, Transaction};
use tokio::sync::Mutex;

use crate::config::StoreConfig;

/// Products in insertion order plus the append-only ledger.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub(crate) products: Vec<Product>,
    pub(crate) transactions: Vec<Transaction>,
}

impl InventoryState {
    /// Creates an empty state.
    pub fn new() -> Self {
        InventoryState::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub(crate) fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Removes a product, keeping the order of the rest.
    pub(crate) fn remove_product(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }
}

/// Cloneable handle to the locked state, shared by every repository.
///
/// Modeled on a `with_cart` / `with_cart_mut` closure API: callers never
/// hold the guard themselves.
#[derive(Debug, Clone)]
pub(crate) struct SharedState {
    inner: Arc<Mutex<InventoryState>>,
    read_latency: Duration,
    write_latency: Duration,
}

impl SharedState {
    pub(crate) fn new(state: InventoryState, config: &StoreConfig) -> Self {
        SharedState {
            inner: Arc::new(Mutex::new(state)),
            read_latency: config.read_latency,
            write_latency: config.write_latency,
        }
    }

    /// Waits out the read latency, then runs `f` with shared access.
    pub(crate) async fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryState) -> R,
    {
        simulate_latency(self.read_latency).await;
        let state = self.inner.lock().await;
        f(&state)
    }

    /// Waits out the write latency, then runs `f` with exclusive access.
    pub(crate) async fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryState) -> R,
    {
        simulate_latency(self.write_latency).await;
        let mut state = self.inner.lock().await;
        f(&mut state)
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "Tools".to_string(),
            description: String::new(),
            price_cents: 100,
            quantity_in_stock: 1,
            items_sold: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_remove_product_keeps_order() {
        let mut state = InventoryState::new();
        state.products = vec![product("a"), product("b"), product("c")];

        let removed = state.remove_product("b").unwrap();
        assert_eq!(removed.id, "b");

        let ids: Vec<&str> = state.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(state.remove_product("b").is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let shared = SharedState::new(InventoryState::new(), &StoreConfig::instant());

        shared.write(|state| state.products.push(product("a"))).await;
        let count = shared.read(|state| state.products().len()).await;

        assert_eq!(count, 1);
    }
}
