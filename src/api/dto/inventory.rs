//! Query and form payloads for the inventory pages and JSON API.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};
use crate::ui::{Action, ListParams, Notice};

/// Query string of `GET /products`.
///
/// `selected` stays textual so a stale or malformed id falls back to the
/// first row instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsPageQuery {
    #[serde(default)]
    pub search: String,
    pub selected: Option<String>,
    pub notice: Option<String>,
}

impl From<ProductsPageQuery> for ListParams {
    fn from(query: ProductsPageQuery) -> Self {
        ListParams {
            search: query.search,
            selected: query.selected.and_then(|s| s.trim().parse().ok()),
            notice: query.notice.as_deref().and_then(Notice::from_query),
        }
    }
}

/// Filter for `GET /api/products`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchQuery {
    /// Case-insensitive substring of the product name
    #[serde(default)]
    #[param(example = "hammer")]
    pub search: String,
}

/// Edit form posted to `POST /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct EditProductForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl EditProductForm {
    pub fn into_action(self, id: i32) -> AppResult<Action> {
        Ok(Action::SaveProduct {
            id,
            quantity: parse_quantity(&self.quantity)?,
            price: parse_price(&self.price)?,
            name: self.name,
        })
    }
}

/// Add form posted to `POST /products/new`.
#[derive(Debug, Deserialize)]
pub struct NewProductForm {
    #[serde(default)]
    pub name: String,
    pub quantity: String,
    pub price: String,
    #[serde(default)]
    pub category_id: String,
}

impl NewProductForm {
    pub fn into_action(self) -> AppResult<Action> {
        let category_id = match self.category_id.trim() {
            "" => None,
            raw => Some(raw.parse().map_err(|_| AppError::BadRequest {
                message: format!("Invalid category id: {}", raw),
            })?),
        };

        Ok(Action::AddProduct {
            quantity: parse_quantity(&self.quantity)?,
            price: parse_price(&self.price)?,
            name: self.name,
            category_id,
        })
    }
}

fn parse_quantity(raw: &str) -> AppResult<i32> {
    raw.trim().parse().map_err(|_| AppError::BadRequest {
        message: format!("Quantity must be a whole number, got '{}'", raw),
    })
}

fn parse_price(raw: &str) -> AppResult<BigDecimal> {
    BigDecimal::from_str(raw.trim()).map_err(|_| AppError::BadRequest {
        message: format!("Price must be a decimal number, got '{}'", raw),
    })
}
