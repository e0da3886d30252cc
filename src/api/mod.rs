//! HTTP layer: dashboard pages, JSON API, middleware and DTOs.

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
