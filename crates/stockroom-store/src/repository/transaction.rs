//! # Transaction Repository
//!
//! The sales ledger. Recording a sale is the only way `items_sold` grows.
//!
//! ## Atomic Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  record(sale)                                                          │
//! │       │                                                                 │
//! │       ▼  sleep(write_latency)        (lock not held)                    │
//! │       │                                                                 │
//! │  ┌────▼──────────────── write lock ─────────────────────────────────┐  │
//! │  │ find product ──► ledger::apply_sale ──► push Transaction          │  │
//! │  │      │                  │                                        │  │
//! │  │      ▼                  ▼                                        │  │
//! │  │ ProductNotFound   InsufficientStock / TotalMismatch / Validation │  │
//! │  │ (nothing changed) (nothing changed)                              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use stockroom_core::ledger::apply_sale;
use stockroom_core::{CoreError, NewTransaction, Transaction};
use tracing::{debug, info, warn};

use crate::error::StoreResult;
use crate::repository::product::generate_id;
use crate::state::SharedState;

/// Repository for the transaction ledger.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    state: SharedState,
}

impl TransactionRepository {
    pub(crate) fn new(state: SharedState) -> Self {
        TransactionRepository { state }
    }

    /// Records a sale and applies it to the product's counters.
    ///
    /// ## What This Does
    /// 1. Takes the write lock
    /// 2. Finds the product
    /// 3. Checks quantity, stock and any quoted total
    /// 4. Decrements stock, increments items sold
    /// 5. Appends the transaction with a fresh id and the current time
    ///
    /// ## Returns
    /// * `Ok(Transaction)` - The recorded sale
    /// * `Err(StoreError::Core(CoreError::ProductNotFound))` - Unknown product
    /// * `Err(StoreError::Core(CoreError::InsufficientStock { .. }))` - Not enough units
    /// * `Err(StoreError::Core(CoreError::TotalMismatch { .. }))` - Quoted total is wrong
    /// * `Err(StoreError::Core(CoreError::AmountOverflow { .. }))` - Total does not fit
    ///
    /// On any error the ledger and the product are unchanged.
    pub async fn record(&self, sale: NewTransaction) -> StoreResult<Transaction> {
        debug!(
            product_id = %sale.product_id,
            quantity = sale.quantity_sold,
            "Recording transaction"
        );

        let result = self
            .state
            .write(|state| {
                let product = state
                    .product_mut(&sale.product_id)
                    .ok_or_else(|| CoreError::ProductNotFound(sale.product_id.clone()))?;

                let total = apply_sale(product, &sale)?;

                let transaction = Transaction {
                    id: generate_id(),
                    product_id: sale.product_id.clone(),
                    quantity_sold: sale.quantity_sold,
                    total_cents: total.cents(),
                    date: Utc::now(),
                };
                state.transactions.push(transaction.clone());
                Ok::<_, CoreError>(transaction)
            })
            .await;

        match result {
            Ok(transaction) => {
                info!(
                    id = %transaction.id,
                    product_id = %transaction.product_id,
                    quantity = transaction.quantity_sold,
                    total = %transaction.total(),
                    "Transaction recorded"
                );
                Ok(transaction)
            }
            Err(err) => {
                warn!(product_id = %sale.product_id, error = %err, "Transaction rejected");
                Err(err.into())
            }
        }
    }

    /// Lists all transactions in recording order.
    pub async fn list(&self) -> Vec<Transaction> {
        debug!("Listing transactions");
        self.state
            .read(|state| state.transactions().to_vec())
            .await
    }

    /// Gets a transaction by its ID.
    pub async fn get(&self, id: &str) -> Option<Transaction> {
        debug!(id = %id, "Getting transaction");
        self.state
            .read(|state| state.transactions().iter().find(|t| t.id == id).cloned())
            .await
    }

    /// Transactions recorded against one product, including products that
    /// have since been deleted.
    pub async fn for_product(&self, product_id: &str) -> Vec<Transaction> {
        debug!(product_id = %product_id, "Listing transactions for product");
        self.state
            .read(|state| {
                state
                    .transactions()
                    .iter()
                    .filter(|t| t.product_id == product_id)
                    .cloned()
                    .collect()
            })
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
