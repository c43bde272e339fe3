//! # Analytics Repository
//!
//! Read-only aggregates over the current catalog. Each call takes a fresh
//! snapshot under the lock and runs the pure functions from
//! `stockroom_core::analytics`; nothing is cached between calls.

use stockroom_core::analytics;
use stockroom_core::{CategoryBreakdown, LowStockItem, Overview};
use tracing::debug;

use crate::state::SharedState;

/// Repository for dashboard aggregates.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    state: SharedState,
    low_stock_threshold: i64,
}

impl AnalyticsRepository {
    pub(crate) fn new(state: SharedState, low_stock_threshold: i64) -> Self {
        AnalyticsRepository {
            state,
            low_stock_threshold,
        }
    }

    /// Totals for the overview cards.
    pub async fn overview(&self) -> Overview {
        debug!("Computing overview");
        self.state
            .read(|state| analytics::overview(state.products()))
            .await
    }

    /// Stock and revenue per category.
    pub async fn category_breakdown(&self) -> CategoryBreakdown {
        debug!("Computing category breakdown");
        self.state
            .read(|state| analytics::category_breakdown(state.products()))
            .await
    }

    /// Products below the configured threshold, lowest stock first.
    pub async fn low_stock(&self) -> Vec<LowStockItem> {
        debug!(threshold = self.low_stock_threshold, "Computing low-stock report");
        let threshold = self.low_stock_threshold;
        self.state
            .read(|state| analytics::low_stock(state.products(), threshold))
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
