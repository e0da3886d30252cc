//! Executes reducer effects against the inventory and renders pages.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::error::AppResult;
use crate::services::{InventoryService, Statistics};

use super::action::{Action, DashboardState, Effect, Notice, reduce};
use super::render::{ADD_TEMPLATE, PRODUCTS_TEMPLATE, Renderer, STATS_TEMPLATE};
use super::views;

/// Query-side inputs of the product list page.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub search: String,
    pub selected: Option<i32>,
    pub notice: Option<Notice>,
}

#[derive(Clone)]
pub struct Dashboard {
    inventory: InventoryService,
    renderer: Arc<Renderer>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(inventory: InventoryService, renderer: Arc<Renderer>, config: DashboardConfig) -> Self {
        Self {
            inventory,
            renderer,
            config,
        }
    }

    /// Reduces `action` and runs the resulting effects in order.
    ///
    /// The first failing effect aborts the rest and its error is returned.
    /// When the reducer rejects the input, no effect runs and the returned
    /// state carries the validation notice.
    pub async fn dispatch(&self, action: Action) -> AppResult<DashboardState> {
        let (state, effects) = reduce(DashboardState::default(), action);
        for effect in effects {
            self.apply(effect).await?;
        }
        Ok(state)
    }

    async fn apply(&self, effect: Effect) -> AppResult<()> {
        match effect {
            Effect::Update(id, changes) => self.inventory.update_product(id, changes).await,
            Effect::Delete(id) => self.inventory.delete_product(id).await,
            Effect::Insert(product) => self.inventory.insert_product(product).await,
        }
    }

    pub async fn products_page(&self, params: &ListParams) -> AppResult<String> {
        let rows = self.inventory.product_rows().await?;
        let view = views::products_view(
            &self.config.title,
            &self.config.currency,
            &rows,
            &params.search,
            params.selected,
            params.notice.as_ref(),
        );
        self.renderer.render(PRODUCTS_TEMPLATE, &view)
    }

    /// The add form, optionally re-populated from a rejected submission.
    pub async fn add_page(&self, state: &DashboardState) -> AppResult<String> {
        let categories = self.inventory.fetch_categories().await?;
        let view = views::add_view(
            &self.config.title,
            categories,
            state.draft.clone(),
            state.notice.as_ref(),
        );
        self.renderer.render(ADD_TEMPLATE, &view)
    }

    pub async fn stats_page(&self) -> AppResult<String> {
        let stats = self.statistics().await?;
        let view = views::stats_view(&self.config.title, &self.config.currency, &stats);
        self.renderer.render(STATS_TEMPLATE, &view)
    }

    pub async fn statistics(&self) -> AppResult<Statistics> {
        let rows = self.inventory.product_rows().await?;
        Ok(Statistics::compute(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheManager;
    use crate::config::CacheConfig;
    use crate::error::AppError;
    use crate::repositories::memory::MemoryStore;
    use bigdecimal::BigDecimal;

    fn dashboard(store: Arc<MemoryStore>) -> Dashboard {
        let inventory =
            InventoryService::new(store, CacheManager::new(&CacheConfig { enabled: true }));
        let renderer = Arc::new(Renderer::new().unwrap());
        Dashboard::new(inventory, renderer, DashboardConfig::default())
    }

    fn seeded() -> Arc<MemoryStore> {
        Arc::new(
            MemoryStore::new()
                .with_category(1, "Tools")
                .with_product("Hammer", 2, "10.00", Some(1))
                .with_product("Nails", 3, "5.00", Some(1)),
        )
    }

    #[tokio::test]
    async fn test_save_then_list_shows_new_values() {
        let store = seeded();
        let dashboard = dashboard(store.clone());
        dashboard.products_page(&ListParams::default()).await.unwrap();

        let state = dashboard
            .dispatch(Action::SaveProduct {
                id: 1,
                name: "Sledgehammer".to_string(),
                quantity: 9,
                price: BigDecimal::from(25),
            })
            .await
            .unwrap();
        assert_eq!(state.notice, Some(Notice::Updated));

        let html = dashboard.products_page(&ListParams::default()).await.unwrap();
        assert!(html.contains("Sledgehammer"));
        assert!(html.contains("25.00 zł"));
    }

    #[tokio::test]
    async fn test_rejected_add_touches_nothing() {
        let store = seeded();
        let dashboard = dashboard(store.clone());

        let state = dashboard
            .dispatch(Action::AddProduct {
                name: "   ".to_string(),
                quantity: 1,
                price: BigDecimal::from(1),
                category_id: Some(1),
            })
            .await
            .unwrap();

        assert!(state.notice.as_ref().is_some_and(Notice::is_error));
        assert_eq!(store.writes(), 0);

        let html = dashboard.add_page(&state).await.unwrap();
        assert!(html.contains("Product name cannot be empty"));
    }

    #[tokio::test]
    async fn test_add_then_stats_reflects_it() {
        let store = seeded();
        let dashboard = dashboard(store.clone());
        assert_eq!(dashboard.statistics().await.unwrap().count, 2);

        dashboard
            .dispatch(Action::AddProduct {
                name: "Saw".to_string(),
                quantity: 1,
                price: BigDecimal::from(40),
                category_id: Some(1),
            })
            .await
            .unwrap();

        let stats = dashboard.statistics().await.unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_value, BigDecimal::from(75));
        let html = dashboard.stats_page().await.unwrap();
        assert!(html.contains("75.00 zł"));
    }

    #[tokio::test]
    async fn test_failed_effect_is_reported() {
        let store = seeded();
        let dashboard = dashboard(store.clone());
        store.go_offline();

        let err = dashboard
            .dispatch(Action::DeleteProduct { id: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Connectivity { .. }));

        store.go_online();
        assert_eq!(store.products().len(), 2);
    }
}
