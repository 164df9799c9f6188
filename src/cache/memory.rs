use dashmap::DashMap;
use std::time::{Duration, Instant};

use super::{Cache, CacheError};
use crate::constants::listing::MEMORY_CACHE_MAX_ENTRIES;

#[derive(Clone, Debug)]
struct CachedEntry {
    data: Vec<u8>,
    cached_at: Instant,
    ttl: Duration,
}

impl CachedEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.cached_at.elapsed() >= self.ttl
    }
}

/// Process-local cache.
///
/// Expired entries are dropped on read, and swept in bulk when an insert finds
/// the map at `max_entries`. If the map is still full of live entries after the
/// sweep, the new key is not cached.
pub struct MemoryCache {
    entries: DashMap<String, CachedEntry>,
    max_entries: usize,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_capacity(MEMORY_CACHE_MAX_ENTRIES)
    }
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before.saturating_sub(self.entries.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait::async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.data.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            tracing::debug!(key = %key, "cache entry expired");
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(key) {
            let removed = self.cleanup_expired();
            tracing::debug!(removed, "Swept expired cache entries");

            if self.entries.len() >= self.max_entries {
                tracing::warn!(
                    max_entries = self.max_entries,
                    key = %key,
                    "Memory cache at capacity, skipping insertion"
                );
                return Ok(());
            }
        }

        self.entries
            .insert(key.to_string(), CachedEntry::new(value, ttl));
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> Result<(), CacheError> {
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        self.entries.retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}
