//! Data Transfer Objects for API requests and responses.
//!
//! - `inventory` - page queries, form payloads and API filters
//! - `health` - health check responses
//! - `error` - common error response

mod error;
mod health;
mod inventory;

pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use inventory::{EditProductForm, NewProductForm, ProductSearchQuery, ProductsPageQuery};
