//! In-memory store used by unit and router tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::error::{AppError, AppResult};
use crate::models::{Category, NewProduct, Product, ProductChanges};
use crate::repositories::InventoryStore;

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    categories: Vec<Category>,
    next_id: i32,
}

/// Behaves like the remote tables and counts the round-trips made to it.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    product_selects: AtomicUsize,
    category_selects: AtomicUsize,
    writes: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, id: i32, name: &str) -> Self {
        self.lock().categories.push(Category {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_product(self, name: &str, quantity: i32, price: &str, category_id: Option<i32>) -> Self {
        {
            let mut tables = self.lock();
            tables.next_id += 1;
            let id = tables.next_id;
            tables.products.push(Product {
                id,
                name: name.to_string(),
                quantity,
                price: price.parse::<BigDecimal>().expect("valid decimal literal"),
                category_id,
            });
        }
        self
    }

    /// Makes every subsequent call fail with a connectivity error.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }

    pub fn product_selects(&self) -> usize {
        self.product_selects.load(Ordering::SeqCst)
    }

    pub fn category_selects(&self) -> usize {
        self.category_selects.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store lock")
    }

    fn check_online(&self, operation: &str) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Connectivity {
                operation: operation.to_string(),
                source: anyhow::anyhow!("connection refused"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn select_products(&self) -> AppResult<Vec<Product>> {
        self.product_selects.fetch_add(1, Ordering::SeqCst);
        self.check_online("select products")?;
        Ok(self.lock().products.clone())
    }

    async fn select_categories(&self) -> AppResult<Vec<Category>> {
        self.category_selects.fetch_add(1, Ordering::SeqCst);
        self.check_online("select categories")?;
        Ok(self.lock().categories.clone())
    }

    async fn insert_product(&self, product: NewProduct) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_online("insert product")?;
        let mut tables = self.lock();
        tables.next_id += 1;
        let id = tables.next_id;
        tables.products.push(Product {
            id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            category_id: product.category_id,
        });
        Ok(())
    }

    async fn update_product(&self, id: i32, changes: ProductChanges) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_online("update product")?;
        if let Some(product) = self.lock().products.iter_mut().find(|p| p.id == id) {
            product.name = changes.name;
            product.quantity = changes.quantity;
            product.price = changes.price;
        }
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_online("delete product")?;
        self.lock().products.retain(|p| p.id != id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_online("ping")
    }
}
