use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category model for reading from database.
///
/// Categories are read-only from the dashboard's point of view.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i32,
    pub name: String,
}
