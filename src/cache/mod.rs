//! Read cache for the inventory data access layer.
//!
//! The cache memoizes the two read operations of the dashboard (product list
//! and category list) and is cleared wholesale after every write. There is no
//! expiry and no size bound: the working set is one shop's inventory.
//!
//! # Configuration
//!
//! ```toml
//! [cache]
//! enabled = true  # false swaps in a pass-through backend
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let cache = CacheManager::new(&settings.cache);
//! let products: Vec<Product> = cache
//!     .get_or_load(CacheKey::Products, || store.select_products())
//!     .await?;
//! cache.invalidate_all().await?;
//! ```

mod error;
mod key;
mod manager;
mod memory;
mod noop;
mod traits;

pub use error::CacheError;
pub use key::CacheKey;
pub use manager::CacheManager;
pub use memory::MemoryCache;
pub use noop::NoOpCache;
pub use traits::AppCache;

// Re-export config types
pub use crate::config::settings::CacheConfig;
