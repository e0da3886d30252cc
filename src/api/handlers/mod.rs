//! HTTP request handlers.
//!
//! - `pages` - server-rendered dashboard
//! - `products` - JSON inventory API
//! - `health` - probes

pub mod health;
pub mod pages;
pub mod products;
