//! Key/value cache used by the employee listing.
//!
//! Two backends: [`MemoryCache`] for a single instance and [`RedisCache`]
//! when several instances share one listing cache.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryCache;
pub use self::redis::RedisCache;

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::{CacheBackendKind, CacheConfig};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache connection error: {0}")]
    Connection(String),
}

#[async_trait::async_trait]
pub trait Cache: Send + Sync {
    /// Returns `None` for a missing or expired key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;

    async fn delete(&self, keys: &[&str]) -> Result<(), CacheError>;

    /// Removes every key starting with `prefix`.
    async fn delete_prefix(&self, prefix: &str) -> Result<(), CacheError>;
}

/// Builds the configured backend. A Redis pool that cannot be created or
/// reached falls back to the in-memory cache.
pub async fn create_cache(config: &CacheConfig) -> Arc<dyn Cache> {
    match config.backend {
        CacheBackendKind::Memory => {
            tracing::info!(max_entries = config.max_entries, "Using in-memory listing cache");
            Arc::new(MemoryCache::with_capacity(config.max_entries))
        }
        CacheBackendKind::Redis => {
            let Some(url) = config.redis_url.as_deref() else {
                tracing::warn!("Redis cache selected without a URL. Falling back to memory cache.");
                return Arc::new(MemoryCache::with_capacity(config.max_entries));
            };

            match RedisCache::connect(url).await {
                Ok(cache) => {
                    tracing::info!("Connected to Redis listing cache");
                    Arc::new(cache)
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to connect to Redis. Falling back to memory cache."
                    );
                    Arc::new(MemoryCache::with_capacity(config.max_entries))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn redis_without_url_falls_back_to_memory() {
        let config = CacheConfig {
            backend: CacheBackendKind::Redis,
            redis_url: None,
            ..CacheConfig::default()
        };

        let cache = create_cache(&config).await;
        cache
            .set("k", b"v".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(b"v".to_vec()));
    }
}
