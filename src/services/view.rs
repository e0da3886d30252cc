//! Joins products with their category names.

use std::collections::HashMap;

use crate::models::{Category, Product, ProductRow};

/// Left join of `products` onto `categories` by `category_id`.
///
/// Every product yields exactly one row, in input order. A NULL or dangling
/// category reference leaves `category_name` empty.
pub fn assemble(products: &[Product], categories: &[Category]) -> Vec<ProductRow> {
    let names: HashMap<i32, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            name: p.name.clone(),
            quantity: p.quantity,
            price: p.price.clone(),
            category_id: p.category_id,
            category_name: p
                .category_id
                .and_then(|id| names.get(&id))
                .map(|name| name.to_string()),
        })
        .collect()
}
