//! Cache Module
//!
//! Lookaside cache plumbing: TTL entries, the in-process store, the key
//! scheme, and the [`CacheService`] seam the catalog services depend on.

mod entry;
pub mod keys;
mod service;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{product_list_key, CATEGORIES_KEY, PRODUCTS_PREFIX};
pub use service::{CacheService, InMemoryCache, SharedCacheStore};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL applied to cached listings unless configured otherwise
pub const DEFAULT_TTL_SECONDS: u64 = 300;
