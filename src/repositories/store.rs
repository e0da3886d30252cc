//! Storage seam between the data access layer and the remote store.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Category, NewProduct, Product, ProductChanges};

/// The remote tables as seen by the rest of the application.
///
/// Every method is one round-trip. Updates and deletes of an id that does not
/// exist succeed without effect.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn select_products(&self) -> AppResult<Vec<Product>>;

    async fn select_categories(&self) -> AppResult<Vec<Category>>;

    async fn insert_product(&self, product: NewProduct) -> AppResult<()>;

    async fn update_product(&self, id: i32, changes: ProductChanges) -> AppResult<()>;

    async fn delete_product(&self, id: i32) -> AppResult<()>;

    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> AppResult<()>;
}
