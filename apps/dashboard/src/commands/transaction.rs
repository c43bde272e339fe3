//! # Transaction Commands
//!
//! Commands for the "Record Transaction" form and the sales history.
//!
//! ## Record Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product ▾  Desk Lamp (18 in stock)     Quantity [ 2 ]    [Record]      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  record_transaction({ productId, quantitySold: 2, totalCents: 9998 })   │
//! │       │                                                                 │
//! │       ├── OK ─────────────────► stock 16, sold 9, TransactionDto        │
//! │       ├── NOT_FOUND ──────────► product was deleted meanwhile           │
//! │       ├── INSUFFICIENT_STOCK ─► "Not enough stock ..."                  │
//! │       └── BUSINESS_LOGIC ─────► quoted total is stale (price changed)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;
use stockroom_core::{NewTransaction, Transaction};

/// Transaction DTO for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: String,
    pub product_id: String,
    pub quantity_sold: i64,
    pub total_cents: i64,
    pub date: DateTime<Utc>,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        TransactionDto {
            id: t.id,
            product_id: t.product_id,
            quantity_sold: t.quantity_sold,
            total_cents: t.total_cents,
            date: t.date,
        }
    }
}

/// Request to record a sale.
///
/// `totalCents` is the total the form showed the user. When present the
/// ledger rejects the sale if it no longer matches the current price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTransactionRequest {
    pub product_id: String,
    pub quantity_sold: i64,
    #[serde(default)]
    pub total_cents: Option<i64>,
}

impl From<RecordTransactionRequest> for NewTransaction {
    fn from(req: RecordTransactionRequest) -> Self {
        NewTransaction {
            product_id: req.product_id,
            quantity_sold: req.quantity_sold,
            total_cents: req.total_cents,
        }
    }
}

/// Records a sale against a product.
///
/// ## Returns
/// * `Ok(TransactionDto)` - The recorded sale
/// * `Err(NOT_FOUND)` - Unknown product
/// * `Err(INSUFFICIENT_STOCK)` - Quantity exceeds stock
/// * `Err(VALIDATION_ERROR)` - Quantity out of range
/// * `Err(BUSINESS_LOGIC)` - Quoted total does not match
pub async fn record_transaction(
    state: &StoreState,
    request: RecordTransactionRequest,
) -> Result<TransactionDto, ApiError> {
    let start = Instant::now();
    debug!(
        product_id = %request.product_id,
        quantity = request.quantity_sold,
        "record_transaction command"
    );

    let transaction = state.inner().transactions().record(request.into()).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = %transaction.id,
        total_cents = transaction.total_cents,
        "record_transaction complete"
    );
    Ok(TransactionDto::from(transaction))
}

/// Lists every transaction in recording order.
pub async fn list_transactions(state: &StoreState) -> Result<Vec<TransactionDto>, ApiError> {
    debug!("list_transactions command");
    let transactions = state.inner().transactions().list().await;
    Ok(transactions.into_iter().map(TransactionDto::from).collect())
}

/// Gets a single transaction.
pub async fn get_transaction(
    state: &StoreState,
    id: String,
) -> Result<Option<TransactionDto>, ApiError> {
    debug!(id = %id, "get_transaction command");
    Ok(state
        .inner()
        .transactions()
        .get(&id)
        .await
        .map(TransactionDto::from))
}

/// Sales history of one product.
pub async fn list_product_transactions(
    state: &StoreState,
    product_id: String,
) -> Result<Vec<TransactionDto>, ApiError> {
    debug!(product_id = %product_id, "list_product_transactions command");
    let transactions = state.inner().transactions().for_product(&product_id).await;
    Ok(transactions.into_iter().map(TransactionDto::from).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_store::{Store, StoreConfig};

    async fn seeded_with_lamp() -> (StoreState, String) {
        let state =
            StoreState::new(Store::new(StoreConfig::instant().seed_demo_data(true)).unwrap());
        let lamp = state
            .inner()
            .products()
            .search("desk lamp")
            .await
            .unwrap()
            .remove(0);
        (state, lamp.id)
    }

    #[tokio::test]
    async fn test_record_transaction() {
        let (state, lamp_id) = seeded_with_lamp().await;

        let request: RecordTransactionRequest = serde_json::from_value(serde_json::json!({
            "productId": lamp_id,
            "quantitySold": 2,
            "totalCents": 9_998,
        }))
        .unwrap();
        let tx = record_transaction(&state, request).await.unwrap();

        assert_eq!(tx.total_cents, 9_998);
        assert_eq!(list_transactions(&state).await.unwrap().len(), 4);
        assert_eq!(get_transaction(&state, tx.id.clone()).await.unwrap(), Some(tx));

        let lamp = state.inner().products().get(&lamp_id).await.unwrap();
        assert_eq!(lamp.quantity_in_stock, 16);
        assert_eq!(lamp.items_sold, 9);
    }

    #[tokio::test]
    async fn test_record_transaction_errors() {
        let (state, lamp_id) = seeded_with_lamp().await;

        let err = record_transaction(
            &state,
            RecordTransactionRequest {
                product_id: "missing".to_string(),
                quantity_sold: 1,
                total_cents: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = record_transaction(
            &state,
            RecordTransactionRequest {
                product_id: lamp_id.clone(),
                quantity_sold: 19,
                total_cents: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = record_transaction(
            &state,
            RecordTransactionRequest {
                product_id: lamp_id,
                quantity_sold: 0,
                total_cents: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(list_transactions(&state).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_product_transactions() {
        let (state, lamp_id) = seeded_with_lamp().await;
        assert!(list_product_transactions(&state, lamp_id.clone())
            .await
            .unwrap()
            .is_empty());

        record_transaction(
            &state,
            RecordTransactionRequest {
                product_id: lamp_id.clone(),
                quantity_sold: 1,
                total_cents: None,
            },
        )
        .await
        .unwrap();

        let history = list_product_transactions(&state, lamp_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].total_cents, 4_999);
    }
}
