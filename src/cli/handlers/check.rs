//! Check command handler
//!
//! Connects with the configured credentials, reads both tables once and
//! prints a summary. Nothing is written.

use std::sync::Arc;

use crate::cache::CacheManager;
use crate::config::{CacheConfig, Settings};
use crate::db::establish_async_connection_pool;
use crate::repositories::{InventoryStore, Repositories};
use crate::services::{InventoryService, Statistics};

pub struct CheckCommandHandler {
    config: Settings,
}

/// What the check found, printed by [`CheckCommandHandler::execute`].
#[derive(Debug, PartialEq)]
pub struct CheckReport {
    pub products: usize,
    pub categories: usize,
    pub total_value: String,
    pub low_stock: usize,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let pool = establish_async_connection_pool(&self.config.database).await?;
        let report = self.inspect(Arc::new(Repositories::new(pool))).await?;

        println!("✓ Connected to the inventory database");
        println!("✓ {} products in {} categories", report.products, report.categories);
        println!("✓ Total value: {}", report.total_value);
        println!("✓ Low stock products: {}", report.low_stock);
        Ok(())
    }

    pub async fn inspect(&self, store: Arc<dyn InventoryStore>) -> anyhow::Result<CheckReport> {
        let inventory = InventoryService::new(store, CacheManager::new(&CacheConfig { enabled: false }));
        inventory.ping().await?;

        let categories = inventory.fetch_categories().await?.len();
        let rows = inventory.product_rows().await?;
        let stats = Statistics::compute(&rows);
        tracing::info!(products = stats.count, categories, "Store check completed");

        Ok(CheckReport {
            products: stats.count,
            categories,
            total_value: stats.display_total(&self.config.dashboard.currency),
            low_stock: stats.low_stock.len(),
        })
    }
}
