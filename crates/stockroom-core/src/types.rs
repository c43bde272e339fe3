//! # Domain Types
//!
//! Core domain types shared by the store and the dashboard commands.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │      Product        │◄───────────│    Transaction      │            │
//! │  │  ─────────────────  │ product_id │  ─────────────────  │            │
//! │  │  id (UUID)          │            │  id (UUID)          │            │
//! │  │  name / category    │            │  quantity_sold      │            │
//! │  │  price_cents        │            │  total_cents        │            │
//! │  │  quantity_in_stock  │            │  date               │            │
//! │  │  items_sold         │            └─────────────────────┘            │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  Inputs:  NewProduct, ProductPatch, NewTransaction                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Counters
//! - `quantity_in_stock` goes down with every sale and may be set by a patch.
//! - `items_sold` only ever goes up, and only through the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog entry with price and stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4), immutable.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text grouping label used for filtering and charts.
    pub category: String,

    /// Longer description shown in the product table.
    pub description: String,

    /// Unit price in cents. Always positive.
    pub price_cents: i64,

    /// Units currently on hand. Never negative.
    pub quantity_in_stock: i64,

    /// Units sold over the product's lifetime.
    pub items_sold: i64,

    /// When the product was created, immutable.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product from validated creation fields.
    ///
    /// `items_sold` starts at zero; the caller supplies the id and timestamp
    /// so this stays a pure function.
    pub fn from_new(id: impl Into<String>, new: NewProduct, created_at: DateTime<Utc>) -> Self {
        Product {
            id: id.into(),
            name: new.name,
            category: new.category,
            description: new.description,
            price_cents: new.price_cents,
            quantity_in_stock: new.quantity_in_stock,
            items_sold: 0,
            created_at,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Revenue earned so far: `items_sold × price`.
    #[inline]
    pub fn revenue(&self) -> Money {
        self.price().multiply_quantity(self.items_sold)
    }

    /// Checks whether `quantity` units can be sold from current stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= self.quantity_in_stock
    }

    /// Merges the fields present in `patch` onto this product.
    ///
    /// `id`, `created_at` and `items_sold` are not patchable.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price_cents) = patch.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(quantity) = patch.quantity_in_stock {
            self.quantity_in_stock = quantity;
        }
    }
}

/// Fields supplied when creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub quantity_in_stock: i64,
}

/// Partial update for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity_in_stock: Option<i64>,
}

impl ProductPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.price_cents.is_none()
            && self.quantity_in_stock.is_none()
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A recorded sale against one product. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    pub id: String,
    pub product_id: String,
    pub quantity_sold: i64,
    /// `quantity_sold × price` at the moment of sale.
    pub total_cents: i64,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// A sale request.
///
/// `total_cents` is optional: when absent the ledger prices the sale from
/// the product, when present it must match that price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewTransaction {
    pub product_id: String,
    pub quantity_sold: i64,
    #[serde(default)]
    pub total_cents: Option<i64>,
}

impl NewTransaction {
    /// A sale priced by the ledger.
    pub fn new(product_id: impl Into<String>, quantity_sold: i64) -> Self {
        NewTransaction {
            product_id: product_id.into(),
            quantity_sold,
            total_cents: None,
        }
    }

    /// Attaches the total the caller quoted to the customer.
    pub fn with_total_cents(mut self, total_cents: i64) -> Self {
        self.total_cents = Some(total_cents);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::from_new(
            "p-1",
            NewProduct {
                name: "Widget".to_string(),
                category: "Tools".to_string(),
                description: String::new(),
                price_cents: 1000,
                quantity_in_stock: 5,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_from_new_starts_unsold() {
        let product = widget();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.items_sold, 0);
        assert_eq!(product.revenue(), Money::zero());
    }

    #[test]
    fn test_can_sell() {
        let product = widget();
        assert!(product.can_sell(5));
        assert!(!product.can_sell(6));
        assert!(!product.can_sell(0));
    }

    #[test]
    fn test_apply_patch_merges_only_present_fields() {
        let mut product = widget();
        let created_at = product.created_at;

        product.apply_patch(ProductPatch {
            price_cents: Some(1250),
            quantity_in_stock: Some(9),
            ..ProductPatch::default()
        });

        assert_eq!(product.name, "Widget");
        assert_eq!(product.category, "Tools");
        assert_eq!(product.price_cents, 1250);
        assert_eq!(product.quantity_in_stock, 9);
        assert_eq!(product.created_at, created_at);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            name: Some("Gadget".to_string()),
            ..ProductPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_new_transaction_total_defaults_to_none() {
        let json = r#"{"product_id":"p-1","quantity_sold":2}"#;
        let tx: NewTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx, NewTransaction::new("p-1", 2));
        assert_eq!(tx.with_total_cents(2000).total_cents, Some(2000));
    }
}
