//! Data access layer for the dashboard.
//!
//! Reads are memoized by the [`CacheManager`]; every write drops all cached
//! reads before it returns, so the next read observes the write.

use std::sync::Arc;

use crate::cache::{CacheKey, CacheManager};
use crate::error::AppResult;
use crate::models::{Category, NewProduct, Product, ProductChanges, ProductRow};
use crate::repositories::InventoryStore;
use crate::services::view;

/// Inventory operations over a store and the shared read cache.
///
/// Cloning is cheap: both the store and the cache sit behind `Arc`.
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
    cache: CacheManager,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStore>, cache: CacheManager) -> Self {
        Self { store, cache }
    }

    /// All products, served from cache when possible.
    ///
    /// An empty table yields an empty vector, not an error.
    pub async fn fetch_products(&self) -> AppResult<Vec<Product>> {
        self.cache
            .get_or_load(CacheKey::Products, || self.store.select_products())
            .await
    }

    /// All categories, served from cache when possible.
    pub async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        self.cache
            .get_or_load(CacheKey::Categories, || self.store.select_categories())
            .await
    }

    /// Inserts a product. The name is not validated here.
    pub async fn insert_product(&self, product: NewProduct) -> AppResult<()> {
        let name = product.name.clone();
        self.store.insert_product(product).await?;
        tracing::info!(name = %name, "Product added");
        self.cache.invalidate_all().await?;
        Ok(())
    }

    /// Overwrites name, quantity and price. A missing id is not an error.
    pub async fn update_product(&self, id: i32, changes: ProductChanges) -> AppResult<()> {
        self.store.update_product(id, changes).await?;
        tracing::info!(product_id = id, "Product updated");
        self.cache.invalidate_all().await?;
        Ok(())
    }

    /// Deletes a product. A missing id is not an error.
    pub async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.store.delete_product(id).await?;
        tracing::info!(product_id = id, "Product deleted");
        self.cache.invalidate_all().await?;
        Ok(())
    }

    /// Both reads joined into the denormalized view.
    pub async fn product_rows(&self) -> AppResult<Vec<ProductRow>> {
        let products = self.fetch_products().await?;
        let categories = self.fetch_categories().await?;
        Ok(view::assemble(&products, &categories))
    }

    /// Bypasses the cache on purpose: this is the liveness probe for the store.
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
