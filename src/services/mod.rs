//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod inventory_service;
pub mod stats;
pub mod view;

pub use inventory_service::InventoryService;
pub use stats::{LOW_STOCK_THRESHOLD, Statistics};

use std::sync::Arc;

use crate::cache::CacheManager;
use crate::repositories::InventoryStore;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the store and cache sit behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub inventory: InventoryService,
}

impl Services {
    pub fn new(store: Arc<dyn InventoryStore>, cache: CacheManager) -> Self {
        Self {
            inventory: InventoryService::new(store, cache),
        }
    }
}
