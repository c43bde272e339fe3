//! # Demo Data
//!
//! The six-product demo catalog and its sales history.
//!
//! ## Catalog
//! | Product             | Category    | Price   | Stock | Sold |
//! |---------------------|-------------|---------|-------|------|
//! | Laptop              | Electronics | $999.99 | 15    | 7    |
//! | Smartphone          | Electronics | $699.99 | 25    | 12   |
//! | Office Chair        | Furniture   | $199.99 | 8     | 3    |
//! | Coffee Maker        | Appliances  | $89.99  | 12    | 9    |
//! | Wireless Headphones | Electronics | $149.99 | 20    | 15   |
//! | Desk Lamp           | Furniture   | $49.99  | 18    | 7    |
//!
//! `items_sold` already includes the historical transactions, so they are
//! appended to the ledger without touching stock.

use chrono::{DateTime, TimeZone, Utc};
use stockroom_core::{Product, Transaction};
use uuid::Uuid;

use crate::state::InventoryState;

struct DemoProduct {
    name: &'static str,
    category: &'static str,
    price_cents: i64,
    quantity_in_stock: i64,
    items_sold: i64,
    description: &'static str,
    created: (i32, u32, u32),
}

const DEMO_PRODUCTS: &[DemoProduct] = &[
    DemoProduct {
        name: "Laptop",
        category: "Electronics",
        price_cents: 99_999,
        quantity_in_stock: 15,
        items_sold: 7,
        description: "High-performance laptop with 16GB RAM and 512GB SSD",
        created: (2023, 1, 15),
    },
    DemoProduct {
        name: "Smartphone",
        category: "Electronics",
        price_cents: 69_999,
        quantity_in_stock: 25,
        items_sold: 12,
        description: "Latest smartphone with 128GB storage and 5G capability",
        created: (2023, 2, 10),
    },
    DemoProduct {
        name: "Office Chair",
        category: "Furniture",
        price_cents: 19_999,
        quantity_in_stock: 8,
        items_sold: 3,
        description: "Ergonomic office chair with lumbar support",
        created: (2023, 3, 5),
    },
    DemoProduct {
        name: "Coffee Maker",
        category: "Appliances",
        price_cents: 8_999,
        quantity_in_stock: 12,
        items_sold: 9,
        description: "Programmable coffee maker with 12-cup capacity",
        created: (2023, 3, 15),
    },
    DemoProduct {
        name: "Wireless Headphones",
        category: "Electronics",
        price_cents: 14_999,
        quantity_in_stock: 20,
        items_sold: 15,
        description: "Noise-cancelling wireless headphones with 30-hour battery life",
        created: (2023, 4, 1),
    },
    DemoProduct {
        name: "Desk Lamp",
        category: "Furniture",
        price_cents: 4_999,
        quantity_in_stock: 18,
        items_sold: 7,
        description: "LED desk lamp with adjustable brightness",
        created: (2023, 4, 10),
    },
];

/// (product index, quantity, date)
const DEMO_SALES: &[(usize, i64, (i32, u32, u32))] = &[
    (0, 2, (2023, 5, 15)),
    (1, 3, (2023, 5, 16)),
    (2, 1, (2023, 5, 17)),
];

fn date((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Builds a state holding the demo catalog and its sales history.
pub fn demo_state() -> InventoryState {
    let products: Vec<Product> = DEMO_PRODUCTS
        .iter()
        .map(|demo| Product {
            id: Uuid::new_v4().to_string(),
            name: demo.name.to_string(),
            category: demo.category.to_string(),
            description: demo.description.to_string(),
            price_cents: demo.price_cents,
            quantity_in_stock: demo.quantity_in_stock,
            items_sold: demo.items_sold,
            created_at: date(demo.created),
        })
        .collect();

    let transactions = DEMO_SALES
        .iter()
        .filter_map(|&(index, quantity, day)| {
            let product = products.get(index)?;
            Some(Transaction {
                id: Uuid::new_v4().to_string(),
                product_id: product.id.clone(),
                quantity_sold: quantity,
                total_cents: product.price().multiply_quantity(quantity).cents(),
                date: date(day),
            })
        })
        .collect();

    InventoryState {
        products,
        transactions,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
