//! Application state for Axum web framework.

use std::sync::Arc;

use crate::cache::CacheManager;
use crate::config::Settings;
use crate::error::AppResult;
use crate::repositories::InventoryStore;
use crate::services::Services;
use crate::ui::{Dashboard, Renderer};

/// Shared by every handler. Cloning is cheap: everything inside is `Arc`-backed.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub dashboard: Dashboard,
    /// Reported by the health endpoint
    pub version: String,
}

impl AppState {
    /// Wires the cache, services and renderer around `store`.
    ///
    /// Fails only if the embedded templates do not compile.
    pub fn new(store: Arc<dyn InventoryStore>, settings: &Settings) -> AppResult<Self> {
        let cache = CacheManager::new(&settings.cache);
        let services = Services::new(store, cache);
        let renderer = Arc::new(Renderer::new()?);
        let dashboard = Dashboard::new(
            services.inventory.clone(),
            renderer,
            settings.dashboard.clone(),
        );

        Ok(Self {
            services,
            dashboard,
            version: settings.application.version.clone(),
        })
    }
}
