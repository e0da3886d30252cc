//! Product repository for async database operations.
//!
//! Select-all, insert, update-by-id and delete-by-id on the products table.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{NewProduct, Product, ProductChanges};

/// Product repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct ProductRepository {
    pool: AsyncDbPool,
}

impl ProductRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists every product in storage order.
    pub async fn list_all(&self) -> AppResult<Vec<Product>> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .select(Product::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "select products"))
    }

    /// Inserts a product; the database assigns the id.
    pub async fn create(&self, new_product: NewProduct) -> AppResult<Product> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(products)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert product"))
    }

    /// Overwrites name, quantity and price of one product.
    ///
    /// # Returns
    /// The number of affected rows (0 when the id does not exist)
    pub async fn update(&self, product_id: i32, changes: ProductChanges) -> AppResult<usize> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(products.filter(id.eq(product_id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update product"))
    }

    /// Deletes one product.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn delete(&self, product_id: i32) -> AppResult<usize> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(products.filter(id.eq(product_id)))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete product"))
    }

    /// Round-trips a trivial query to prove the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.pool.get().await?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "ping"))
    }
}
