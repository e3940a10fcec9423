//! Lookaside services
//!
//! Category and product operations with a read-through cache on listings
//! and write-invalidate on every successful mutation. Writes always reach
//! the catalog store first; invalidation only runs once the store call has
//! succeeded.
//!
//! The cache is fail-open: an unreachable cache or an unreadable entry is a
//! miss, and a failed invalidation leaves at worst a stale entry that
//! expires with its TTL.

mod categories;
mod products;

#[cfg(test)]
pub(crate) mod testing;

pub use categories::CategoryService;
pub use products::ProductService;

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::CacheService;
use crate::error::Result;

/// Serves `key` from cache, or runs `fetch` and caches its result.
///
/// Presence is decided by the cache lookup alone, so an empty list that was
/// cached is served as a hit.
async fn read_through<T, F, Fut>(
    cache: &dyn CacheService,
    key: &str,
    ttl_seconds: u64,
    fetch: F,
) -> Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    match cache.get(key).await {
        Ok(Some(cached)) => match serde_json::from_str(&cached) {
            Ok(items) => {
                debug!(key, "cache hit");
                return Ok(items);
            }
            Err(e) => warn!(key, error = %e, "discarding unreadable cache entry"),
        },
        Ok(None) => debug!(key, "cache miss"),
        Err(e) => warn!(key, error = %e, "cache lookup failed, reading from catalog"),
    }

    let items = fetch().await?;

    match serde_json::to_string(&items) {
        Ok(encoded) => {
            if let Err(e) = cache.set(key, encoded, ttl_seconds).await {
                warn!(key, error = %e, "cache populate failed");
            }
        }
        Err(e) => warn!(key, error = %e, "could not encode listing for cache"),
    }

    Ok(items)
}

/// Drops one key after a committed write.
async fn invalidate_key(cache: &dyn CacheService, key: &str) {
    match cache.delete(key).await {
        Ok(removed) => debug!(key, removed, "invalidated cache key"),
        Err(e) => warn!(key, error = %e, "cache invalidation failed, entry may be stale until expiry"),
    }
}

/// Drops every key under `prefix` after a committed write.
async fn invalidate_prefix(cache: &dyn CacheService, prefix: &str) {
    match cache.delete_prefix(prefix).await {
        Ok(removed) => debug!(prefix, removed, "invalidated cache namespace"),
        Err(e) => warn!(prefix, error = %e, "cache sweep failed, entries may be stale until expiry"),
    }
}
