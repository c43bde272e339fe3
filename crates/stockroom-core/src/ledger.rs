//! # Ledger Rules
//!
//! The pure part of recording a sale: the checks and counter updates
//! applied to one product. The store runs this while holding its write
//! lock and appends the resulting transaction.
//!
//! ## Sale Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewTransaction { product_id, quantity_sold, total_cents? }             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. quantity in 1..=9999?          no → ValidationError                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. product exists?  (store)       no → ProductNotFound                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. quantity <= stock?             no → InsufficientStock               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. total = price × quantity                                            │
//! │     quoted total differs?          yes → TotalMismatch                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. stock -= qty, items_sold += qty                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure leaves the product untouched.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{NewTransaction, Product};
use crate::validation::validate_sale_quantity;

/// Prices a sale against a product without changing it.
///
/// ## Returns
/// * `Ok(Money)` - The sale total
/// * `Err(CoreError::Validation)` - Quantity out of range
/// * `Err(CoreError::InsufficientStock)` - Not enough units on hand
/// * `Err(CoreError::AmountOverflow)` - Total does not fit in an amount
/// * `Err(CoreError::TotalMismatch)` - Quoted total differs from the price
pub fn price_sale(product: &Product, sale: &NewTransaction) -> CoreResult<Money> {
    validate_sale_quantity(sale.quantity_sold)?;

    if sale.quantity_sold > product.quantity_in_stock {
        return Err(CoreError::InsufficientStock {
            product_id: product.id.clone(),
            available: product.quantity_in_stock,
            requested: sale.quantity_sold,
        });
    }

    let total = product
        .price()
        .checked_multiply_quantity(sale.quantity_sold)
        .ok_or_else(|| CoreError::AmountOverflow {
            product_id: product.id.clone(),
            price_cents: product.price_cents,
            quantity: sale.quantity_sold,
        })?;

    if let Some(quoted) = sale.total_cents {
        if quoted != total.cents() {
            return Err(CoreError::TotalMismatch {
                expected_cents: total.cents(),
                provided_cents: quoted,
            });
        }
    }

    Ok(total)
}

/// Applies a sale to a product's counters and returns the sale total.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use stockroom_core::ledger::apply_sale;
/// use stockroom_core::types::{NewProduct, NewTransaction, Product};
///
/// let mut widget = Product::from_new(
///     "p-1",
///     NewProduct {
///         name: "Widget".to_string(),
///         category: "Tools".to_string(),
///         description: String::new(),
///         price_cents: 1000,
///         quantity_in_stock: 5,
///     },
///     Utc::now(),
/// );
///
/// let total = apply_sale(&mut widget, &NewTransaction::new("p-1", 2)).unwrap();
/// assert_eq!(total.cents(), 2000);
/// assert_eq!(widget.quantity_in_stock, 3);
/// assert_eq!(widget.items_sold, 2);
/// ```
pub fn apply_sale(product: &mut Product, sale: &NewTransaction) -> CoreResult<Money> {
    let total = price_sale(product, sale)?;

    product.quantity_in_stock -= sale.quantity_sold;
    product.items_sold += sale.quantity_sold;

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use chrono::Utc;

    fn widget() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            description: String::new(),
            price_cents: 1000,
            quantity_in_stock: 5,
            items_sold: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_widget_sale() {
        let mut product = widget();
        let total = apply_sale(&mut product, &NewTransaction::new("p-1", 2)).unwrap();

        assert_eq!(total, Money::from_cents(2000));
        assert_eq!(product.quantity_in_stock, 3);
        assert_eq!(product.items_sold, 2);
        assert_eq!(product.revenue().cents(), 2000);
    }

    #[test]
    fn test_sell_entire_stock() {
        let mut product = widget();
        apply_sale(&mut product, &NewTransaction::new("p-1", 5)).unwrap();
        assert_eq!(product.quantity_in_stock, 0);
    }

    #[test]
    fn test_insufficient_stock_leaves_product_untouched() {
        let mut product = widget();
        let err = apply_sale(&mut product, &NewTransaction::new("p-1", 6)).unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product_id: "p-1".to_string(),
                available: 5,
                requested: 6,
            }
        );
        assert_eq!(product, widget_with_same_time(&product));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut product = widget();
        let err = apply_sale(&mut product, &NewTransaction::new("p-1", 0)).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert_eq!(product.quantity_in_stock, 5);
    }

    #[test]
    fn test_quoted_total_must_match() {
        let mut product = widget();

        let ok = NewTransaction::new("p-1", 2).with_total_cents(2000);
        assert!(apply_sale(&mut product, &ok).is_ok());

        let wrong = NewTransaction::new("p-1", 1).with_total_cents(999);
        let err = apply_sale(&mut product, &wrong).unwrap_err();
        assert_eq!(
            err,
            CoreError::TotalMismatch {
                expected_cents: 1000,
                provided_cents: 999,
            }
        );
        assert_eq!(product.quantity_in_stock, 3);
        assert_eq!(product.items_sold, 2);
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let mut product = Product {
            price_cents: i64::MAX / 2,
            ..widget()
        };
        let before = product.clone();

        let err = apply_sale(&mut product, &NewTransaction::new("p-1", 3)).unwrap_err();
        assert_eq!(
            err,
            CoreError::AmountOverflow {
                product_id: "p-1".to_string(),
                price_cents: i64::MAX / 2,
                quantity: 3,
            }
        );
        assert_eq!(product, before);
    }

    fn widget_with_same_time(product: &Product) -> Product {
        Product {
            created_at: product.created_at,
            ..widget()
        }
    }
}
