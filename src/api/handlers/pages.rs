//! HTML dashboard handlers.
//!
//! Every successful POST answers with `303 See Other` so a browser reload
//! never repeats the write.

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};

use crate::api::dto::{EditProductForm, NewProductForm, ProductsPageQuery};
use crate::api::middleware::PageError;
use crate::state::AppState;
use crate::ui::{Action, DashboardState, ListParams, Notice};

type PageResult<T> = Result<T, PageError>;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/products", get(list_products))
        .route("/products/new", get(new_product_form).post(add_product))
        .route("/products/{id}", post(save_product))
        .route("/products/{id}/delete", post(delete_product))
        .route("/stats", get(statistics))
}

fn redirect_with(notice: &Notice, selected: Option<i32>) -> Redirect {
    let notice = notice.as_query().unwrap_or_default();
    match selected {
        Some(id) => Redirect::to(&format!("/products?selected={}&notice={}", id, notice)),
        None => Redirect::to(&format!("/products?notice={}", notice)),
    }
}

async fn index() -> Redirect {
    Redirect::to("/products")
}

/// GET /products - filterable product table with the edit form
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsPageQuery>,
) -> PageResult<Html<String>> {
    let params = ListParams::from(query);
    Ok(Html(state.dashboard.products_page(&params).await?))
}

/// POST /products/{id} - overwrite name, quantity and price
async fn save_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<EditProductForm>,
) -> PageResult<Redirect> {
    let action = form.into_action(id)?;
    let outcome = state.dashboard.dispatch(action).await?;
    let notice = outcome.notice.unwrap_or(Notice::Updated);
    Ok(redirect_with(&notice, Some(id)))
}

/// POST /products/{id}/delete
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> PageResult<Redirect> {
    let action = Action::DeleteProduct { id };
    let outcome = state.dashboard.dispatch(action).await?;
    let notice = outcome.notice.unwrap_or(Notice::Deleted);
    Ok(redirect_with(&notice, None))
}

/// GET /products/new
async fn new_product_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    Ok(Html(state.dashboard.add_page(&DashboardState::default()).await?))
}

/// POST /products/new - rejected input re-renders the form with 422
async fn add_product(
    State(state): State<AppState>,
    Form(form): Form<NewProductForm>,
) -> PageResult<Response> {
    let action = form.into_action()?;
    let outcome = state.dashboard.dispatch(action).await?;

    match &outcome.notice {
        Some(notice) if notice.is_error() => {
            let html = state.dashboard.add_page(&outcome).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        notice => {
            let notice = notice.clone().unwrap_or(Notice::Added);
            Ok(redirect_with(&notice, None).into_response())
        }
    }
}

/// GET /stats
async fn statistics(State(state): State<AppState>) -> PageResult<Html<String>> {
    Ok(Html(state.dashboard.stats_page().await?))
}
