//! # Stockroom Dashboard
//!
//! Runs one pass of the dashboard against the configured store: records a
//! sale, then prints the data every page would render.

use stockroom_dashboard::commands::{analytics, product, transaction};
use stockroom_dashboard::{build_state, init_tracing, DashboardConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::load()?;
    init_tracing(&config.log_filter);

    info!("Starting Stockroom dashboard...");

    let state = build_state(&config)?;

    let lamps = product::search_products(&state, "desk lamp".to_string()).await?;
    match lamps.first() {
        Some(lamp) => {
            let sale = transaction::record_transaction(
                &state,
                transaction::RecordTransactionRequest {
                    product_id: lamp.id.clone(),
                    quantity_sold: 1,
                    total_cents: Some(lamp.price_cents),
                },
            )
            .await?;
            info!(id = %sale.id, "Recorded sale of {}", lamp.name);
        }
        None => warn!("No Desk Lamp in the catalog, skipping sale"),
    }

    let overview = analytics::get_overview(&state).await?;
    let breakdown = analytics::get_category_breakdown(&state).await?;
    let low_stock = analytics::get_low_stock(&state).await?;

    println!("{}", serde_json::to_string_pretty(&overview)?);
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    println!("{}", serde_json::to_string_pretty(&low_stock)?);

    Ok(())
}
