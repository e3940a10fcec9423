//! Cache service seam
//!
//! The lookaside layer talks to the cache through [`CacheService`] so the
//! backing service can be swapped (or faked in tests). [`InMemoryCache`]
//! is the in-process implementation over [`CacheStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

/// Operations the lookaside layer needs from a cache backend.
///
/// Absence is never an error: `get` reports it as `None`, and deleting
/// keys that are not there succeeds with nothing removed. Errors mean the
/// backend itself could not be reached.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up a live entry.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a value that expires `ttl_seconds` from now.
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()>;

    /// Removes one key. Returns whether it was present.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Removes every key starting with `prefix`. Returns how many.
    async fn delete_prefix(&self, prefix: &str) -> Result<usize>;

    /// Current counters.
    async fn stats(&self) -> Result<CacheStats>;
}

/// Shared handle to the in-process store, as used by the expiry sweep.
pub type SharedCacheStore = Arc<RwLock<CacheStore>>;

/// In-process [`CacheService`] backed by a [`CacheStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    store: SharedCacheStore,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying store, e.g. for the background expiry task.
    pub fn store(&self) -> SharedCacheStore {
        self.store.clone()
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // write lock: expired entries are dropped on access and stats move
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        self.store
            .write()
            .await
            .set(key.to_string(), value, ttl_seconds);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.store.write().await.delete(key))
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        Ok(self.store.write().await.delete_prefix(prefix))
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(self.store.read().await.stats())
    }
}
