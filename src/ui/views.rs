//! Page models built from loaded rows. Nothing here touches the store.

use serde::Serialize;

use crate::models::{Category, ProductRow};
use crate::services::Statistics;
use crate::services::stats::format_amount;

use super::action::{Notice, ProductDraft};

/// Banner shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
}

impl From<&Notice> for Flash {
    fn from(notice: &Notice) -> Self {
        Self {
            message: notice.message().to_string(),
            is_error: notice.is_error(),
        }
    }
}

/// Table row with its price already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProduct {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: String,
    pub category: String,
    pub selected: bool,
}

/// Values pre-filled into the edit form for the selected row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditForm {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsView {
    pub title: String,
    pub search: String,
    pub products: Vec<ListedProduct>,
    pub edit: Option<EditForm>,
    pub flash: Option<Flash>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddView {
    pub title: String,
    pub categories: Vec<Category>,
    pub draft: Option<ProductDraft>,
    pub flash: Option<Flash>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub title: String,
    pub count: usize,
    pub total_value: String,
    pub low_stock: Vec<ListedProduct>,
    pub flash: Option<Flash>,
}

fn category_label(row: &ProductRow) -> String {
    row.category_name.clone().unwrap_or_default()
}

fn listed(row: &ProductRow, currency: &str, selected: bool) -> ListedProduct {
    ListedProduct {
        id: row.id,
        name: row.name.clone(),
        quantity: row.quantity,
        price: format_amount(&row.price, currency),
        category: category_label(row),
        selected,
    }
}

/// Rows whose name contains `search`, ignoring case.
///
/// An empty or whitespace-only search keeps every row.
pub fn filter_rows<'a>(rows: &'a [ProductRow], search: &str) -> Vec<&'a ProductRow> {
    // Surrounding whitespace is ignored, so " hammer" matches "Claw Hammer".
    let needle = search.trim();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| row.name_contains(needle)).collect()
}

/// Picks the row to edit: the requested id when it is visible, otherwise the
/// first visible row.
pub fn select_row<'a>(visible: &[&'a ProductRow], requested: Option<i32>) -> Option<&'a ProductRow> {
    requested
        .and_then(|id| visible.iter().copied().find(|row| row.id == id))
        .or_else(|| visible.first().copied())
}

pub fn products_view(
    title: &str,
    currency: &str,
    rows: &[ProductRow],
    search: &str,
    selected: Option<i32>,
    notice: Option<&Notice>,
) -> ProductsView {
    let visible = filter_rows(rows, search);
    let chosen = select_row(&visible, selected);
    let chosen_id = chosen.map(|row| row.id);

    let products = visible
        .iter()
        .map(|row| listed(row, currency, Some(row.id) == chosen_id))
        .collect();

    let edit = chosen.map(|row| EditForm {
        id: row.id,
        name: row.name.clone(),
        quantity: row.quantity,
        // Full precision, so saving an untouched price writes it back unchanged.
        price: row.price.to_string(),
        category: category_label(row),
    });

    ProductsView {
        title: title.to_string(),
        search: search.to_string(),
        products,
        edit,
        flash: notice.map(Flash::from),
    }
}

pub fn add_view(
    title: &str,
    categories: Vec<Category>,
    draft: Option<ProductDraft>,
    notice: Option<&Notice>,
) -> AddView {
    AddView {
        title: title.to_string(),
        categories,
        draft,
        flash: notice.map(Flash::from),
    }
}

pub fn stats_view(title: &str, currency: &str, stats: &Statistics) -> StatsView {
    StatsView {
        title: title.to_string(),
        count: stats.count,
        total_value: stats.display_total(currency),
        low_stock: stats
            .low_stock
            .iter()
            .map(|row| listed(row, currency, false))
            .collect(),
        flash: None,
    }
}
