//! # Product Repository
//!
//! Catalog operations for products.
//!
//! ## Key Operations
//! - CRUD with validated inputs
//! - Substring search and exact category filter
//! - Product table queries (filter + sort)
//!
//! ## Id Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ❌ id = products.len() + 1                                             │
//! │     [1, 2, 3] → delete 2 → [1, 3] → create → id 3  (duplicate!)         │
//! │                                                                         │
//! │  ✅ id = Uuid::new_v4()                                                 │
//! │     Independent of the collection, never reused after a delete.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use stockroom_core::search;
use stockroom_core::validation::{validate_new_product, validate_patch, validate_search_query};
use stockroom_core::{NewProduct, Product, ProductPatch, ProductQuery};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::state::SharedState;

/// Repository for product operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// // Create, then read back
/// let lamp = repo.create(new_lamp).await?;
/// let found = repo.get(&lamp.id).await;
///
/// // Search across name, description, category
/// let results = repo.search("lamp").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    state: SharedState,
}

impl ProductRepository {
    pub(crate) fn new(state: SharedState) -> Self {
        ProductRepository { state }
    }

    /// Lists all products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        debug!("Listing products");
        self.state.read(|state| state.products().to_vec()).await
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Some(Product)` - Product found
    /// * `None` - Product not found
    pub async fn get(&self, id: &str) -> Option<Product> {
        debug!(id = %id, "Getting product");
        self.state.read(|state| state.product(id).cloned()).await
    }

    /// Creates a product with a fresh id and `items_sold = 0`.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored record
    /// * `Err(StoreError::Validation)` - A field broke a form rule
    pub async fn create(&self, new: NewProduct) -> StoreResult<Product> {
        validate_new_product(&new)?;

        let product = Product::from_new(generate_id(), new, Utc::now());
        debug!(id = %product.id, name = %product.name, "Creating product");

        let created = self
            .state
            .write(|state| {
                state.products.push(product.clone());
                product
            })
            .await;

        info!(id = %created.id, category = %created.category, "Product created");
        Ok(created)
    }

    /// Merges the present fields of `patch` into a product.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - The updated record
    /// * `Ok(None)` - Product not found
    /// * `Err(StoreError::Validation)` - A present field broke a form rule
    pub async fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Option<Product>> {
        validate_patch(&patch)?;
        debug!(id = %id, "Updating product");

        let updated = self
            .state
            .write(|state| {
                let product = state.product_mut(id)?;
                product.apply_patch(patch);
                Some(product.clone())
            })
            .await;

        match &updated {
            Some(product) => info!(id = %product.id, "Product updated"),
            None => debug!(id = %id, "Update skipped, product not found"),
        }
        Ok(updated)
    }

    /// Deletes a product. Its transactions stay in the ledger.
    ///
    /// ## Returns
    /// `true` when a record was removed.
    pub async fn delete(&self, id: &str) -> bool {
        debug!(id = %id, "Deleting product");

        let removed = self
            .state
            .write(|state| state.remove_product(id).is_some())
            .await;

        if removed {
            info!(id = %id, "Product deleted");
        }
        removed
    }

    /// Case-insensitive substring search over name, description and
    /// category.
    ///
    /// ## Arguments
    /// * `query` - Search term, matched as typed. Empty or whitespace
    ///   returns everything.
    ///
    /// ## Returns
    /// * `Err(StoreError::Validation)` - Query longer than 100 characters
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        validate_search_query(query)?;
        debug!(query = %query, "Searching products");

        let products = self
            .state
            .read(|state| search::search(state.products(), query))
            .await;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Products whose category equals `category` exactly.
    pub async fn filter_by_category(&self, category: &str) -> Vec<Product> {
        debug!(category = %category, "Filtering products by category");
        self.state
            .read(|state| search::filter_by_category(state.products(), category))
            .await
    }

    /// Distinct categories in order of first appearance.
    pub async fn categories(&self) -> Vec<String> {
        self.state
            .read(|state| search::categories(state.products()))
            .await
    }

    /// Runs a product table query: search, category filter, then sort.
    ///
    /// ## Returns
    /// * `Err(StoreError::Validation)` - Search text longer than 100 characters
    pub async fn query(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
        if let Some(text) = &query.search {
            validate_search_query(text)?;
        }
        debug!(
            search = ?query.search,
            category = ?query.category,
            sort = ?query.sort,
            "Querying products"
        );

        Ok(self
            .state
            .read(|state| search::apply_query(state.products(), query))
            .await)
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> usize {
        self.state.read(|state| state.products().len()).await
    }
}

/// Generates a new product or transaction ID.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::{Store, StoreConfig};
    use std::collections::HashSet;
    use stockroom_core::{
        NewProduct, ProductPatch, ProductQuery, ProductSort, SortDirection, SortField,
        ValidationError,
    };

    fn new_product(name: &str, category: &str, price_cents: i64, stock: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            description: format!("{name} description"),
            price_cents,
            quantity_in_stock: stock,
        }
    }

    fn store() -> Store {
        Store::new(StoreConfig::instant()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = store();
        let repo = store.products();

        let widget = repo.create(new_product("Widget", "Tools", 1000, 5)).await.unwrap();

        assert_eq!(widget.items_sold, 0);
        assert_eq!(repo.get(&widget.id).await, Some(widget.clone()));
        assert_eq!(repo.list().await, vec![widget]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let store = store();

        let err = store
            .products()
            .create(new_product("", "Tools", 1000, 5))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required { .. })
        ));

        let err = store
            .products()
            .create(new_product("Widget", "Tools", 0, 5))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        let err = store
            .products()
            .create(new_product("Widget", "Tools", i64::MAX / 2, 5))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::OutOfRange { .. })
        ));

        assert_eq!(store.products().count().await, 0);
    }

    #[tokio::test]
    async fn test_update_rejects_oversized_price() {
        let store = store();
        let repo = store.products();
        let widget = repo.create(new_product("Widget", "Tools", 1000, 5)).await.unwrap();

        let patch = ProductPatch {
            price_cents: Some(i64::MAX / 2),
            ..ProductPatch::default()
        };
        let err = repo.update(&widget.id, patch).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(repo.get(&widget.id).await.unwrap().price_cents, 1000);
    }

    #[tokio::test]
    async fn test_list_returns_snapshot() {
        let store = store();
        let repo = store.products();
        repo.create(new_product("Widget", "Tools", 1000, 5)).await.unwrap();

        let mut listed = repo.list().await;
        listed[0].quantity_in_stock = 0;
        listed[0].name = "Changed".to_string();
        listed.clear();

        let stored = repo.list().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Widget");
        assert_eq!(stored[0].quantity_in_stock, 5);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = store();
        let repo = store.products();

        for name in ["Zeta", "Alpha", "Mid"] {
            repo.create(new_product(name, "Tools", 100, 1)).await.unwrap();
        }

        let names: Vec<String> = repo.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[tokio::test]
    async fn test_ids_unique_after_delete() {
        let store = store();
        let repo = store.products();

        let a = repo.create(new_product("A", "Tools", 100, 1)).await.unwrap();
        let b = repo.create(new_product("B", "Tools", 100, 1)).await.unwrap();
        assert!(repo.delete(&a.id).await);
        let c = repo.create(new_product("C", "Tools", 100, 1)).await.unwrap();

        let ids: HashSet<String> = [a.id, b.id, c.id].into_iter().collect();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = store();
        let repo = store.products();
        let widget = repo.create(new_product("Widget", "Tools", 1000, 5)).await.unwrap();

        let updated = repo
            .update(
                &widget.id,
                ProductPatch {
                    price_cents: Some(1200),
                    ..ProductPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price_cents, 1200);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.created_at, widget.created_at);
        assert_eq!(repo.get(&widget.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = store();
        let result = store
            .products()
            .update("missing", ProductPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_negative_stock() {
        let store = store();
        let repo = store.products();
        let widget = repo.create(new_product("Widget", "Tools", 1000, 5)).await.unwrap();

        let patch = ProductPatch {
            quantity_in_stock: Some(-1),
            ..ProductPatch::default()
        };
        assert!(repo.update(&widget.id, patch).await.is_err());
        assert_eq!(repo.get(&widget.id).await.unwrap().quantity_in_stock, 5);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = store();
        let repo = store.products();
        let widget = repo.create(new_product("Widget", "Tools", 1000, 5)).await.unwrap();

        assert!(repo.delete(&widget.id).await);
        assert_eq!(repo.get(&widget.id).await, None);
        assert!(!repo.delete(&widget.id).await);
    }

    #[tokio::test]
    async fn test_search_and_filter() {
        let store = store();
        let repo = store.products();
        repo.create(new_product("Laptop", "Electronics", 99_999, 15)).await.unwrap();
        repo.create(new_product("Desk Lamp", "Furniture", 4_999, 18)).await.unwrap();

        assert_eq!(repo.search("").await.unwrap().len(), 2);
        assert_eq!(repo.search("LAMP").await.unwrap()[0].name, "Desk Lamp");
        assert!(repo.search("tractor").await.unwrap().is_empty());
        assert!(repo.search(&"x".repeat(101)).await.is_err());
        assert!(repo.search(" Laptop").await.unwrap().is_empty());

        assert_eq!(repo.filter_by_category("Electronics").await.len(), 1);
        assert!(repo.filter_by_category("electronics").await.is_empty());
        assert_eq!(repo.categories().await, ["Electronics", "Furniture"]);
    }

    #[tokio::test]
    async fn test_query_sorts_by_price_desc() {
        let store = store();
        let repo = store.products();
        repo.create(new_product("Lamp", "Furniture", 4_999, 18)).await.unwrap();
        repo.create(new_product("Chair", "Furniture", 19_999, 8)).await.unwrap();
        repo.create(new_product("Laptop", "Electronics", 99_999, 15)).await.unwrap();

        let query = ProductQuery {
            search: None,
            category: Some("Furniture".to_string()),
            sort: Some(ProductSort {
                field: SortField::Price,
                direction: SortDirection::Desc,
            }),
        };
        let names: Vec<String> = repo
            .query(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Chair", "Lamp"]);

        let query = ProductQuery {
            search: Some("la".to_string()),
            ..query
        };
        let names: Vec<String> = repo
            .query(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Lamp"]);

        let query = ProductQuery {
            search: Some("x".repeat(101)),
            ..query
        };
        assert!(repo.query(&query).await.is_err());
    }
}
