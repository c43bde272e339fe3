//! # Analytics Commands
//!
//! Data for the dashboard home: overview cards, the stock and revenue
//! charts, and the low-stock list on the transactions page.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;
use stockroom_core::{CategoryBreakdown, LowStockItem, Overview, StockLevel};

/// Overview cards: products, stock, sold, revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    pub total_products: i64,
    pub total_stock: i64,
    pub total_sold: i64,
    pub total_revenue_cents: i64,
}

impl From<Overview> for OverviewDto {
    fn from(o: Overview) -> Self {
        OverviewDto {
            total_products: o.total_products,
            total_stock: o.total_stock,
            total_sold: o.total_sold,
            total_revenue_cents: o.total_revenue.cents(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStockDto {
    pub category: String,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRevenueDto {
    pub category: String,
    pub revenue_cents: i64,
}

/// Series for the stock bar chart and the revenue pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownDto {
    pub stock_by_category: Vec<CategoryStockDto>,
    pub revenue_by_category: Vec<CategoryRevenueDto>,
}

impl From<CategoryBreakdown> for CategoryBreakdownDto {
    fn from(b: CategoryBreakdown) -> Self {
        CategoryBreakdownDto {
            stock_by_category: b
                .stock_by_category
                .into_iter()
                .map(|s| CategoryStockDto {
                    category: s.category,
                    stock: s.stock,
                })
                .collect(),
            revenue_by_category: b
                .revenue_by_category
                .into_iter()
                .map(|r| CategoryRevenueDto {
                    category: r.category,
                    revenue_cents: r.revenue.cents(),
                })
                .collect(),
        }
    }
}

/// A row of the low-stock list.
///
/// `level` drives the styling: `out_of_stock` bold, `critical` red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockDto {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub quantity_in_stock: i64,
    pub level: StockLevel,
}

impl From<LowStockItem> for LowStockDto {
    fn from(item: LowStockItem) -> Self {
        LowStockDto {
            product_id: item.product_id,
            name: item.name,
            category: item.category,
            quantity_in_stock: item.quantity_in_stock,
            level: item.level,
        }
    }
}

/// Totals for the overview cards.
pub async fn get_overview(state: &StoreState) -> Result<OverviewDto, ApiError> {
    let start = Instant::now();
    debug!("get_overview command");

    let overview = state.inner().analytics().overview().await;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        total_revenue = %overview.total_revenue,
        "get_overview complete"
    );
    Ok(OverviewDto::from(overview))
}

/// Stock and revenue per category.
pub async fn get_category_breakdown(state: &StoreState) -> Result<CategoryBreakdownDto, ApiError> {
    debug!("get_category_breakdown command");
    let breakdown = state.inner().analytics().category_breakdown().await;
    Ok(CategoryBreakdownDto::from(breakdown))
}

/// Products that need restocking, lowest stock first.
pub async fn get_low_stock(state: &StoreState) -> Result<Vec<LowStockDto>, ApiError> {
    debug!("get_low_stock command");
    let items = state.inner().analytics().low_stock().await;
    Ok(items.into_iter().map(LowStockDto::from).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_store::{Store, StoreConfig};

    fn seeded() -> StoreState {
        StoreState::new(Store::new(StoreConfig::instant().seed_demo_data(true)).unwrap())
    }

    #[tokio::test]
    async fn test_overview_of_demo_catalog() {
        let overview = get_overview(&seeded()).await.unwrap();

        assert_eq!(overview.total_products, 6);
        assert_eq!(overview.total_stock, 98);
        assert_eq!(overview.total_sold, 53);
        // 7×99999 + 12×69999 + 3×19999 + 9×8999 + 15×14999 + 7×4999
        assert_eq!(overview.total_revenue_cents, 1_940_947);
    }

    #[tokio::test]
    async fn test_category_breakdown_json_shape() {
        let breakdown = get_category_breakdown(&seeded()).await.unwrap();
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["stockByCategory"][0]["category"], "Electronics");
        assert_eq!(json["stockByCategory"][0]["stock"], 60);
        assert_eq!(json["revenueByCategory"][1]["category"], "Furniture");
        assert_eq!(json["revenueByCategory"][1]["revenueCents"], 3 * 19_999 + 7 * 4_999);
    }

    #[tokio::test]
    async fn test_low_stock_of_demo_catalog() {
        let items = get_low_stock(&seeded()).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Office Chair");
        assert_eq!(items[0].level, StockLevel::Low);
    }
}
