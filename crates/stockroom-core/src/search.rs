//! # Search Module
//!
//! Matching, filtering and sorting over a product snapshot.
//!
//! All operations are linear scans. The catalog is small and lives in
//! memory, so there is no index to keep in sync.
//!
//! ## Query Pipeline
//! ```text
//! products ──► search (substring) ──► category filter (exact) ──► sort (stable) ──► result
//!               None/blank = all        None = all                 None = insertion order
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Query Types
// =============================================================================

/// Column the product table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortField {
    Name,
    Category,
    Price,
    QuantityInStock,
    ItemsSold,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Flips the direction, like clicking the same column header twice.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSort {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Product table query: optional search, category filter and sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductQuery {
    /// Search box contents. `None` or blank keeps every product.
    #[serde(default)]
    pub search: Option<String>,
    /// `None` keeps every category.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<ProductSort>,
}

// =============================================================================
// Matching
// =============================================================================

/// Case-insensitive substring match on name, description and category.
///
/// `needle` must already be lowercased. An empty needle matches everything.
pub fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Returns the products matching `query`, in catalog order.
///
/// ## Example
/// ```rust
/// use stockroom_core::search::search;
///
/// assert!(search(&[], "lamp").is_empty());
/// ```
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    if query.trim().is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches_query(p, &needle))
        .cloned()
        .collect()
}

/// Exact, case-sensitive category match.
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// Distinct categories in order of first appearance.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

// =============================================================================
// Sorting
// =============================================================================

fn compare_by(field: SortField, a: &Product, b: &Product) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        SortField::Price => a.price_cents.cmp(&b.price_cents),
        SortField::QuantityInStock => a.quantity_in_stock.cmp(&b.quantity_in_stock),
        SortField::ItemsSold => a.items_sold.cmp(&b.items_sold),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Sorts in place. Stable: equal keys keep their relative order in both
/// directions.
pub fn sort_products(products: &mut [Product], sort: ProductSort) {
    products.sort_by(|a, b| {
        let ordering = compare_by(sort.field, a, b);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Runs a full product table query over a snapshot: search, then
/// category filter, then sort.
pub fn apply_query(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut result = match &query.search {
        Some(text) => search(products, text),
        None => products.to_vec(),
    };

    if let Some(category) = &query.category {
        result.retain(|p| &p.category == category);
    }

    if let Some(sort) = query.sort {
        sort_products(&mut result, sort);
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
