//! User intents and the pure reducer that turns them into store effects.

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::models::{NewProduct, ProductChanges};

/// Something the user asked for through a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SaveProduct {
        id: i32,
        name: String,
        quantity: i32,
        price: BigDecimal,
    },
    DeleteProduct {
        id: i32,
    },
    AddProduct {
        name: String,
        quantity: i32,
        price: BigDecimal,
        category_id: Option<i32>,
    },
}

/// A write to perform against the data access layer, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Update(i32, ProductChanges),
    Delete(i32),
    Insert(NewProduct),
}

/// Feedback shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Notice {
    Updated,
    Deleted,
    Added,
    Invalid { field: String, message: String },
}

impl Notice {
    fn invalid(field: &str, message: &str) -> Self {
        Notice::Invalid {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Value carried through the post-redirect `notice` query parameter.
    ///
    /// Validation failures are rendered in place and never redirected.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Notice::Updated => Some("updated"),
            Notice::Deleted => Some("deleted"),
            Notice::Added => Some("added"),
            Notice::Invalid { .. } => None,
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            "added" => Some(Notice::Added),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Updated => "Product updated",
            Notice::Deleted => "Product deleted",
            Notice::Added => "Product added",
            Notice::Invalid { message, .. } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Invalid { .. })
    }
}

/// Add-form values echoed back after a validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub notice: Option<Notice>,
    pub draft: Option<ProductDraft>,
}

/// Pure transition: no I/O happens here, effects are executed by the caller.
pub fn reduce(state: DashboardState, action: Action) -> (DashboardState, Vec<Effect>) {
    match action {
        Action::SaveProduct {
            id,
            name,
            quantity,
            price,
        } => (
            DashboardState {
                notice: Some(Notice::Updated),
                ..state
            },
            vec![Effect::Update(
                id,
                ProductChanges {
                    name,
                    quantity,
                    price,
                },
            )],
        ),
        Action::DeleteProduct { id } => (
            DashboardState {
                notice: Some(Notice::Deleted),
                ..state
            },
            vec![Effect::Delete(id)],
        ),
        Action::AddProduct {
            name,
            quantity,
            price,
            category_id,
        } => {
            let draft = ProductDraft {
                name: name.clone(),
                quantity,
                price: price.clone(),
                category_id,
            };

            let trimmed = name.trim();
            if trimmed.is_empty() {
                return (
                    DashboardState {
                        notice: Some(Notice::invalid("name", "Product name cannot be empty")),
                        draft: Some(draft),
                    },
                    Vec::new(),
                );
            }

            let Some(category_id) = category_id else {
                return (
                    DashboardState {
                        notice: Some(Notice::invalid("category", "Choose a category")),
                        draft: Some(draft),
                    },
                    Vec::new(),
                );
            };

            (
                DashboardState {
                    notice: Some(Notice::Added),
                    draft: None,
                },
                vec![Effect::Insert(NewProduct {
                    name: trimmed.to_string(),
                    quantity,
                    price,
                    category_id: Some(category_id),
                })],
            )
        }
    }
}
