//! # Product Commands
//!
//! Commands behind the products table, the add/edit forms and search.
//!
//! ## Products Page Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Products page                                                          │
//! │  ┌─────────────────────────────┐  ┌──────────────────────────────────┐ │
//! │  │ 🔍 search_products("lamp")  │  │ Category ▾  (list_categories)    │ │
//! │  └─────────────────────────────┘  └──────────────────────────────────┘ │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │ Name ↕ │ Category ↕ │ Price ↕ │ Stock ↕ │ Sold ↕ │ Actions      │  │
//! │  │        query_products({ category, sortBy, sortDirection })       │  │
//! │  │ Desk Lamp │ Furniture │ $49.99 │ 18 │ 7 │ Edit · Delete          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Add form  ──► create_product      Edit form ──► update_product        │
//! │  Delete    ──► delete_product                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;
use stockroom_core::{
    NewProduct, Product, ProductPatch, ProductQuery, ProductSort, SortDirection, SortField,
};

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Product DTO for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price_cents: i64,
    pub quantity_in_stock: i64,
    pub items_sold: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            category: p.category,
            description: p.description,
            price_cents: p.price_cents,
            quantity_in_stock: p.quantity_in_stock,
            items_sold: p.items_sold,
            created_at: p.created_at,
        }
    }
}

fn to_dtos(products: Vec<Product>) -> Vec<ProductDto> {
    products.into_iter().map(ProductDto::from).collect()
}

/// Fields of the "Add Product" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub quantity_in_stock: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            category: req.category,
            description: req.description,
            price_cents: req.price_cents,
            quantity_in_stock: req.quantity_in_stock,
        }
    }
}

/// Fields of the "Edit Product" form. Omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub quantity_in_stock: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        ProductPatch {
            name: req.name,
            category: req.category,
            description: req.description,
            price_cents: req.price_cents,
            quantity_in_stock: req.quantity_in_stock,
        }
    }
}

/// Products table state: search box, category dropdown and sorted column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQueryRequest {
    /// Search box contents, matched as typed.
    pub search: Option<String>,
    /// `None` or `"all"` keeps every category.
    pub category: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
}

impl From<ProductQueryRequest> for ProductQuery {
    fn from(req: ProductQueryRequest) -> Self {
        ProductQuery {
            search: req.search,
            category: req.category.filter(|c| c != ALL_CATEGORIES),
            sort: req.sort_by.map(|field| ProductSort {
                field,
                direction: req.sort_direction.unwrap_or_default(),
            }),
        }
    }
}

/// Lists every product in insertion order.
pub async fn list_products(state: &StoreState) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    debug!("list_products command");

    let dtos = to_dtos(state.inner().products().list().await);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "list_products complete"
    );
    Ok(dtos)
}

/// Gets a single product for the edit page.
///
/// ## Returns
/// `None` when the id is unknown; the page shows "Product not found".
pub async fn get_product(state: &StoreState, id: String) -> Result<Option<ProductDto>, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(state.inner().products().get(&id).await.map(ProductDto::from))
}

/// Creates a product from the "Add Product" form.
///
/// ## Returns
/// * `Ok(ProductDto)` - The new record, with its generated id
/// * `Err(VALIDATION_ERROR)` - A field broke a form rule
pub async fn create_product(
    state: &StoreState,
    request: CreateProductRequest,
) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(name = %request.name, "create_product command");

    let product = state.inner().products().create(request.into()).await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        id = %product.id,
        "create_product complete"
    );
    Ok(ProductDto::from(product))
}

/// Applies the "Edit Product" form.
pub async fn update_product(
    state: &StoreState,
    id: String,
    request: UpdateProductRequest,
) -> Result<Option<ProductDto>, ApiError> {
    let start = Instant::now();
    debug!(id = %id, "update_product command");

    let updated = state
        .inner()
        .products()
        .update(&id, request.into())
        .await?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        found = updated.is_some(),
        "update_product complete"
    );
    Ok(updated.map(ProductDto::from))
}

/// Deletes a product. Returns `true` when something was removed.
pub async fn delete_product(state: &StoreState, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_product command");
    Ok(state.inner().products().delete(&id).await)
}

/// Case-insensitive search over name, description and category.
pub async fn search_products(
    state: &StoreState,
    query: String,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    debug!(query = %query, "search_products command");

    let dtos = to_dtos(state.inner().products().search(&query).await?);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        query = %query,
        "search_products complete"
    );
    Ok(dtos)
}

/// Products in exactly this category.
pub async fn filter_products_by_category(
    state: &StoreState,
    category: String,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(category = %category, "filter_products_by_category command");
    Ok(to_dtos(
        state.inner().products().filter_by_category(&category).await,
    ))
}

/// Searched, filtered and sorted products for the table.
///
/// ## Returns
/// * `Err(VALIDATION_ERROR)` - Search text longer than 100 characters
pub async fn query_products(
    state: &StoreState,
    request: ProductQueryRequest,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    debug!(?request, "query_products command");

    let query = ProductQuery::from(request);
    let dtos = to_dtos(state.inner().products().query(&query).await?);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "query_products complete"
    );
    Ok(dtos)
}

/// Distinct categories for the filter dropdown.
pub async fn list_categories(state: &StoreState) -> Result<Vec<String>, ApiError> {
    debug!("list_categories command");
    Ok(state.inner().products().categories().await)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_store::{Store, StoreConfig};

    fn seeded() -> StoreState {
        StoreState::new(Store::new(StoreConfig::instant().seed_demo_data(true)).unwrap())
    }

    #[tokio::test]
    async fn test_list_products_seeded() {
        let state = seeded();
        let products = list_products(&state).await.unwrap();

        assert_eq!(products.len(), 6);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[0].price_cents, 99_999);
    }

    #[tokio::test]
    async fn test_create_update_delete_roundtrip() {
        let state = seeded();

        let created = create_product(
            &state,
            CreateProductRequest {
                name: "Standing Desk".to_string(),
                category: "Furniture".to_string(),
                description: String::new(),
                price_cents: 39_999,
                quantity_in_stock: 4,
            },
        )
        .await
        .unwrap();
        assert_eq!(created.items_sold, 0);

        let updated = update_product(
            &state,
            created.id.clone(),
            UpdateProductRequest {
                quantity_in_stock: Some(12),
                ..UpdateProductRequest::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.quantity_in_stock, 12);
        assert_eq!(updated.name, "Standing Desk");

        assert!(delete_product(&state, created.id.clone()).await.unwrap());
        assert_eq!(get_product(&state, created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_product_validation_error() {
        let state = seeded();
        let err = create_product(
            &state,
            CreateProductRequest {
                name: "Freebie".to_string(),
                category: "Misc".to_string(),
                description: String::new(),
                price_cents: 0,
                quantity_in_stock: 1,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_products(&state).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_update_unknown_product() {
        let state = seeded();
        let result = update_product(&state, "missing".to_string(), UpdateProductRequest::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_and_categories() {
        let state = seeded();

        let results = search_products(&state, "wireless".to_string()).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Wireless Headphones");

        assert_eq!(search_products(&state, String::new()).await.unwrap().len(), 6);

        assert_eq!(
            list_categories(&state).await.unwrap(),
            ["Electronics", "Furniture", "Appliances"]
        );
        assert_eq!(
            filter_products_by_category(&state, "Furniture".to_string())
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_query_products_all_sorted_by_sold() {
        let state = seeded();
        let request: ProductQueryRequest = serde_json::from_str(
            r#"{"category":"all","sortBy":"itemsSold","sortDirection":"desc"}"#,
        )
        .unwrap();

        let names: Vec<String> = query_products(&state, request)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        // Laptop and Desk Lamp tie at 7 and keep catalog order
        assert_eq!(
            names,
            [
                "Wireless Headphones",
                "Smartphone",
                "Coffee Maker",
                "Laptop",
                "Desk Lamp",
                "Office Chair",
            ]
        );
    }

    #[tokio::test]
    async fn test_query_products_searches_filters_and_sorts() {
        let state = seeded();
        let request: ProductQueryRequest = serde_json::from_str(
            r#"{"search":"GB","category":"Electronics","sortBy":"price","sortDirection":"asc"}"#,
        )
        .unwrap();

        let names: Vec<String> = query_products(&state, request)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Smartphone", "Laptop"]);

        let request = ProductQueryRequest {
            search: Some("GB".to_string()),
            category: Some("Furniture".to_string()),
            ..ProductQueryRequest::default()
        };
        assert!(query_products(&state, request).await.unwrap().is_empty());

        let request = ProductQueryRequest {
            search: Some("q".repeat(101)),
            ..ProductQueryRequest::default()
        };
        let err = query_products(&state, request).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_product_dto_is_camel_case() {
        let json = serde_json::to_value(ProductDto {
            id: "p-1".to_string(),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            description: String::new(),
            price_cents: 1000,
            quantity_in_stock: 5,
            items_sold: 0,
            created_at: Utc::now(),
        })
        .unwrap();

        assert!(json.get("quantityInStock").is_some());
        assert!(json.get("itemsSold").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
