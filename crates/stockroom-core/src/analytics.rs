//! # Analytics Module
//!
//! Aggregates for the dashboard's overview cards and charts.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  &[Product] snapshot ──┬──► overview()            → 4 summary cards     │
//! │                        ├──► category_breakdown()  → stock & revenue     │
//! │                        │                            bar/pie charts      │
//! │                        └──► low_stock(threshold)  → restock list        │
//! │                                                                         │
//! │  Every call recomputes from the snapshot. Nothing is cached.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// Stock below this level is critical regardless of the configured threshold.
pub const CRITICAL_STOCK_LEVEL: i64 = 5;

// =============================================================================
// Derived Types
// =============================================================================

/// Totals across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Overview {
    pub total_products: i64,
    pub total_stock: i64,
    pub total_sold: i64,
    /// `Σ items_sold × price` over every product.
    pub total_revenue: Money,
}

/// Units on hand for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryStock {
    pub category: String,
    pub stock: i64,
}

/// Revenue earned by one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: Money,
}

/// Per-category series. Both lists share the same category order: first
/// appearance in the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryBreakdown {
    pub stock_by_category: Vec<CategoryStock>,
    pub revenue_by_category: Vec<CategoryRevenue>,
}

/// Severity of a product's stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StockLevel {
    /// Nothing left.
    OutOfStock,
    /// Fewer than 5 units.
    Critical,
    /// Below the restock threshold.
    Low,
    Healthy,
}

impl StockLevel {
    /// Classifies a stock count against a restock threshold.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::analytics::StockLevel;
    ///
    /// assert_eq!(StockLevel::classify(0, 10), StockLevel::OutOfStock);
    /// assert_eq!(StockLevel::classify(3, 10), StockLevel::Critical);
    /// assert_eq!(StockLevel::classify(8, 10), StockLevel::Low);
    /// assert_eq!(StockLevel::classify(10, 10), StockLevel::Healthy);
    /// ```
    pub fn classify(quantity_in_stock: i64, threshold: i64) -> Self {
        if quantity_in_stock <= 0 {
            StockLevel::OutOfStock
        } else if quantity_in_stock < CRITICAL_STOCK_LEVEL && quantity_in_stock < threshold {
            StockLevel::Critical
        } else if quantity_in_stock < threshold {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }
}

/// A product that needs restocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowStockItem {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub quantity_in_stock: i64,
    pub level: StockLevel,
}

// =============================================================================
// Aggregations
// =============================================================================

/// Computes the overview totals.
///
/// ## Example
/// ```rust
/// use stockroom_core::analytics::overview;
///
/// let totals = overview(&[]);
/// assert_eq!(totals.total_products, 0);
/// assert!(totals.total_revenue.is_zero());
/// ```
pub fn overview(products: &[Product]) -> Overview {
    Overview {
        total_products: products.len() as i64,
        total_stock: products.iter().map(|p| p.quantity_in_stock).sum(),
        total_sold: products.iter().map(|p| p.items_sold).sum(),
        total_revenue: products.iter().map(Product::revenue).sum(),
    }
}

/// Groups stock and revenue by category.
///
/// Categories are matched exactly (case-sensitive), consistent with
/// category filtering.
pub fn category_breakdown(products: &[Product]) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();

    for product in products {
        let slot = breakdown
            .stock_by_category
            .iter()
            .position(|entry| entry.category == product.category);

        match slot {
            Some(index) => {
                breakdown.stock_by_category[index].stock += product.quantity_in_stock;
                breakdown.revenue_by_category[index].revenue += product.revenue();
            }
            None => {
                breakdown.stock_by_category.push(CategoryStock {
                    category: product.category.clone(),
                    stock: product.quantity_in_stock,
                });
                breakdown.revenue_by_category.push(CategoryRevenue {
                    category: product.category.clone(),
                    revenue: product.revenue(),
                });
            }
        }
    }

    breakdown
}

/// Lists products whose stock is below `threshold`, lowest stock first.
///
/// Ties keep catalog order.
pub fn low_stock(products: &[Product], threshold: i64) -> Vec<LowStockItem> {
    let mut items: Vec<LowStockItem> = products
        .iter()
        .filter(|p| p.quantity_in_stock < threshold)
        .map(|p| LowStockItem {
            product_id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            quantity_in_stock: p.quantity_in_stock,
            level: StockLevel::classify(p.quantity_in_stock, threshold),
        })
        .collect();

    items.sort_by_key(|item| item.quantity_in_stock);
    items
}

// =============================================================================
// Unit Tests
// =============================================================================
