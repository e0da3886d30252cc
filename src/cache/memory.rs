//! Memory cache implementation using cached::UnboundCache.

use std::sync::Mutex;

use async_trait::async_trait;
use cached::{Cached, UnboundCache};

use crate::cache::{AppCache, CacheError};

/// In-memory cache without expiry or size limit.
pub struct MemoryCache {
    store: Mutex<UnboundCache<String, Vec<u8>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(UnboundCache::new()),
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.store.lock().map(|s| s.cache_size()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut store = self
            .store
            .lock()
            .map_err(|e| CacheError::Operation(e.to_string()))?;
        Ok(store.cache_get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError> {
        let mut store = self
            .store
            .lock()
            .map_err(|e| CacheError::Operation(e.to_string()))?;
        store.cache_set(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut store = self
            .store
            .lock()
            .map_err(|e| CacheError::Operation(e.to_string()))?;
        store.cache_clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set() {
        let cache = MemoryCache::new();
        cache.set("key", b"value".to_vec()).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some(b"value".to_vec()));
        assert_eq!(cache.get("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = MemoryCache::new();
        cache.set("k1", b"v1".to_vec()).await.unwrap();
        cache.set("k2", b"v2".to_vec()).await.unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear().await.unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.get("k1").await.unwrap(), None);
    }
}
