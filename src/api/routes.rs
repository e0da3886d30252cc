//! Router configuration.
//!
//! Pages and the JSON API share one state and one middleware stack.

use axum::{Json, Router, middleware, routing::get};
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the application router.
///
/// Layers run outermost first: request ID, then logging, then compression,
/// so every log line carries the request ID.
pub fn create_router(state: AppState) -> Router {
    let (api_router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::products::inventory_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    Router::new()
        .merge(handlers::pages::page_routes())
        .merge(api_router)
        .route(
            OPENAPI_PATH,
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
