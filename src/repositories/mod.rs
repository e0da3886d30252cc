//! Repository layer for data access operations.
//!
//! Provides async access to the products and categories tables.

mod category_repo;
#[cfg(test)]
pub(crate) mod memory;
mod product_repo;
mod store;

pub use category_repo::CategoryRepository;
pub use product_repo::ProductRepository;
pub use store::InventoryStore;

use async_trait::async_trait;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::{Category, NewProduct, Product, ProductChanges};

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub products: ProductRepository,
    pub categories: CategoryRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            products: ProductRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool),
        }
    }
}

#[async_trait]
impl InventoryStore for Repositories {
    async fn select_products(&self) -> AppResult<Vec<Product>> {
        self.products.list_all().await
    }

    async fn select_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.list_all().await
    }

    async fn insert_product(&self, product: NewProduct) -> AppResult<()> {
        let created = self.products.create(product).await?;
        tracing::debug!(product_id = created.id, "Product row inserted");
        Ok(())
    }

    async fn update_product(&self, id: i32, changes: ProductChanges) -> AppResult<()> {
        let affected = self.products.update(id, changes).await?;
        if affected == 0 {
            tracing::debug!(product_id = id, "Update matched no product");
        }
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> AppResult<()> {
        let affected = self.products.delete(id).await?;
        if affected == 0 {
            tracing::debug!(product_id = id, "Delete matched no product");
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.products.ping().await
    }
}
