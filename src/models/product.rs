//! Product models for database operations and display.

use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product model for reading from database
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
}

/// NewProduct model for inserting new records
#[derive(Debug, Insertable, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
}

/// ProductChanges model for in-place edits.
///
/// The category reference is deliberately absent: it is fixed at creation.
#[derive(Debug, AsChangeset, Clone, PartialEq)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChanges {
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

/// A product joined with the name of its category.
///
/// `category_name` is `None` when the product has no category or references
/// one that does not exist.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    #[schema(value_type = String, example = "12.50")]
    pub price: BigDecimal,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

impl ProductRow {
    /// Inventory value of this row (quantity times unit price).
    pub fn value(&self) -> BigDecimal {
        BigDecimal::from(self.quantity) * &self.price
    }

    /// Case-insensitive substring match on the product name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
