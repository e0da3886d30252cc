//! Aggregate figures for the statistics view.

use bigdecimal::BigDecimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ProductRow;

/// Rows with a quantity strictly below this are listed as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Statistics {
    /// Number of products
    pub count: usize,
    /// Sum of quantity times price, exact
    #[schema(value_type = String, example = "35.00")]
    pub total_value: BigDecimal,
    /// Products below [`LOW_STOCK_THRESHOLD`], in input order
    pub low_stock: Vec<ProductRow>,
}

impl Statistics {
    pub fn compute(rows: &[ProductRow]) -> Self {
        let total_value = rows
            .iter()
            .fold(BigDecimal::from(0), |acc, row| acc + row.value());

        let low_stock = rows
            .iter()
            .filter(|row| row.quantity < LOW_STOCK_THRESHOLD)
            .cloned()
            .collect();

        Self {
            count: rows.len(),
            total_value,
            low_stock,
        }
    }

    /// Total value rounded to two places, e.g. `35.00 zł`.
    pub fn display_total(&self, currency: &str) -> String {
        format_amount(&self.total_value, currency)
    }
}

/// Formats a monetary amount with exactly two decimal places.
pub fn format_amount(amount: &BigDecimal, currency: &str) -> String {
    format!("{} {}", amount.round(2).with_scale(2), currency)
}
