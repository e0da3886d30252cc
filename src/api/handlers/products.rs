//! Read-only JSON view of the inventory.

use axum::{
    Json,
    extract::{Query, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::INVENTORY_TAG;
use crate::api::dto::{ErrorResponse, ProductSearchQuery};
use crate::error::AppResult;
use crate::models::{Category, ProductRow};
use crate::services::Statistics;
use crate::state::AppState;
use crate::ui::views::filter_rows;

pub fn inventory_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_products))
        .routes(routes!(list_categories))
        .routes(routes!(inventory_statistics))
}

/// GET /api/products - products joined with their category name
#[utoipa::path(
    get,
    path = "/api/products",
    tag = INVENTORY_TAG,
    params(ProductSearchQuery),
    responses(
        (status = 200, description = "Products matching the search", body = Vec<ProductRow>),
        (status = 502, description = "Inventory database unreachable", body = ErrorResponse)
    )
)]
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductSearchQuery>,
) -> AppResult<Json<Vec<ProductRow>>> {
    let rows = state.services.inventory.product_rows().await?;
    let matching = filter_rows(&rows, &query.search)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(matching))
}

/// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 502, description = "Inventory database unreachable", body = ErrorResponse)
    )
)]
async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.services.inventory.fetch_categories().await?))
}

/// GET /api/stats - count, exact total value and low stock rows
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "Inventory statistics", body = Statistics),
        (status = 502, description = "Inventory database unreachable", body = ErrorResponse)
    )
)]
async fn inventory_statistics(State(state): State<AppState>) -> AppResult<Json<Statistics>> {
    Ok(Json(state.dashboard.statistics().await?))
}
