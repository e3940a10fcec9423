//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries. Reads
//! already treat expired entries as misses; the sweep only reclaims memory
//! for listings nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCacheStore;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs until aborted, sleeping for the given interval between
/// sweeps.
///
/// # Returns
/// A JoinHandle for the spawned task, to abort it during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = InMemoryCache::new();
/// let cleanup_handle = spawn_cleanup_task(cache.store(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: SharedCacheStore, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
