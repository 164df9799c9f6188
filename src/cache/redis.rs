use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use ::redis::AsyncCommands;
use std::time::Duration;

use super::{Cache, CacheError};

pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Creates the pool and checks out one connection to prove the server is
    /// reachable.
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let pool = PoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        pool.get()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    async fn conn(&self) -> Result<deadpool_redis::Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))
    }
}

fn backend_err(e: ::redis::RedisError) -> CacheError {
    CacheError::Backend(e.to_string())
}

#[async_trait::async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn().await?;
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(backend_err)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1))
            .await
            .map_err(backend_err)
    }

    async fn delete(&self, keys: &[&str]) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(keys).await.map_err(backend_err)
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        let keys: Vec<String> = ::redis::cmd("KEYS")
            .arg(format!("{prefix}*"))
            .query_async(&mut conn)
            .await
            .map_err(backend_err)?;

        if keys.is_empty() {
            return Ok(());
        }

        tracing::debug!(prefix, count = keys.len(), "Deleting cached keys by prefix");
        conn.del::<_, ()>(keys).await.map_err(backend_err)
    }
}
