//! Cache manager that memoizes reads over the configured backend.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::cache::memory::MemoryCache;
use crate::cache::noop::NoOpCache;
use crate::cache::{AppCache, CacheError, CacheKey};
use crate::config::settings::CacheConfig;
use crate::error::AppResult;

/// Explicit read cache shared by reference between request handlers.
///
/// Cloning is cheap: the backend and the generation counter sit behind `Arc`.
#[derive(Clone)]
pub struct CacheManager {
    backend: Arc<dyn AppCache>,
    /// Bumped on every invalidation. A load only stores its result if the
    /// generation it started under is still current, so a read racing a write
    /// cannot repopulate the cache with pre-write data.
    generation: Arc<RwLock<u64>>,
    enabled: bool,
}

impl CacheManager {
    /// Create a cache manager from configuration.
    ///
    /// If caching is disabled, a NoOpCache is used.
    pub fn new(config: &CacheConfig) -> Self {
        let backend: Arc<dyn AppCache> = if config.enabled {
            Arc::new(MemoryCache::new())
        } else {
            Arc::new(NoOpCache::new())
        };
        Self::with_backend(backend, config.enabled)
    }

    /// Create a cache manager over an explicit backend.
    pub fn with_backend(backend: Arc<dyn AppCache>, enabled: bool) -> Self {
        Self {
            backend,
            generation: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Check if caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return the cached value for `key`, or run `loader` and remember its result.
    ///
    /// Loader errors are returned unchanged and never cached. Backend failures
    /// only cost a cache miss.
    pub async fn get_or_load<T, F, Fut>(&self, key: CacheKey, loader: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        match self.backend.get(key.as_str()).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<T>(&bytes) {
                Ok(value) => {
                    tracing::debug!(key = %key, "Cache hit");
                    return Ok(value);
                }
                Err(e) => tracing::warn!(key = %key, error = %e, "Discarding undecodable cache entry"),
            },
            Ok(None) => tracing::debug!(key = %key, "Cache miss"),
            Err(e) => tracing::warn!(key = %key, error = %e, "Cache read failed"),
        }

        let started_under = *self.generation.read().await;
        let value = loader().await?;

        if let Err(e) = self.store(key, &value, started_under).await {
            tracing::warn!(key = %key, error = %e, "Cache write failed");
        }

        Ok(value)
    }

    async fn store<T: Serialize>(
        &self,
        key: CacheKey,
        value: &T,
        started_under: u64,
    ) -> Result<(), CacheError> {
        let generation = self.generation.read().await;
        if *generation != started_under {
            tracing::debug!(key = %key, "Cache invalidated during load, not storing");
            return Ok(());
        }
        let bytes =
            serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))?;
        self.backend.set(key.as_str(), bytes).await
    }

    /// Drop every cached read.
    pub async fn invalidate_all(&self) -> Result<(), CacheError> {
        let mut generation = self.generation.write().await;
        *generation += 1;
        self.backend.clear().await?;
        tracing::debug!(generation = *generation, "Cache invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn enabled() -> CacheManager {
        CacheManager::new(&CacheConfig { enabled: true })
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let cache = enabled();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let load = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, AppError>(vec![1, 2, 3])
        };

        let first: Vec<i32> = cache.get_or_load(CacheKey::Products, load).await.unwrap();
        let second: Vec<i32> = cache.get_or_load(CacheKey::Products, load).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = enabled();
        let products: Vec<i32> = cache
            .get_or_load(CacheKey::Products, || async { Ok(vec![1]) })
            .await
            .unwrap();
        let categories: Vec<i32> = cache
            .get_or_load(CacheKey::Categories, || async { Ok(vec![2]) })
            .await
            .unwrap();
        assert_eq!(products, vec![1]);
        assert_eq!(categories, vec![2]);
    }

    #[tokio::test]
    async fn test_invalidate_all_forces_reload() {
        let cache = enabled();
        let _: Vec<i32> = cache
            .get_or_load(CacheKey::Products, || async { Ok(vec![1]) })
            .await
            .unwrap();
        let _: Vec<i32> = cache
            .get_or_load(CacheKey::Categories, || async { Ok(vec![1]) })
            .await
            .unwrap();

        cache.invalidate_all().await.unwrap();

        let products: Vec<i32> = cache
            .get_or_load(CacheKey::Products, || async { Ok(vec![9]) })
            .await
            .unwrap();
        let categories: Vec<i32> = cache
            .get_or_load(CacheKey::Categories, || async { Ok(vec![8]) })
            .await
            .unwrap();
        assert_eq!(products, vec![9]);
        assert_eq!(categories, vec![8]);
    }

    #[tokio::test]
    async fn test_loader_error_is_not_cached() {
        let cache = enabled();
        let failed: AppResult<Vec<i32>> = cache
            .get_or_load(CacheKey::Products, || async {
                Err(AppError::Connectivity {
                    operation: "select products".to_string(),
                    source: anyhow::anyhow!("connection refused"),
                })
            })
            .await;
        assert!(failed.is_err());

        let loaded: Vec<i32> = cache
            .get_or_load(CacheKey::Products, || async { Ok(vec![4]) })
            .await
            .unwrap();
        assert_eq!(loaded, vec![4]);
    }

    #[tokio::test]
    async fn test_load_racing_invalidation_is_not_stored() {
        let cache = enabled();
        let racing = cache.clone();

        let stale: Vec<i32> = cache
            .get_or_load(CacheKey::Products, || async move {
                racing.invalidate_all().await.unwrap();
                Ok(vec![0])
            })
            .await
            .unwrap();
        assert_eq!(stale, vec![0]);

        let fresh: Vec<i32> = cache
            .get_or_load(CacheKey::Products, || async { Ok(vec![1]) })
            .await
            .unwrap();
        assert_eq!(fresh, vec![1]);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_loads() {
        let cache = CacheManager::new(&CacheConfig { enabled: false });
        assert!(!cache.is_enabled());
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        for _ in 0..3 {
            let _: Vec<i32> = cache
                .get_or_load(CacheKey::Products, move || async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![])
                })
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
