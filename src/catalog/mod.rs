//! Catalog Module
//!
//! The authoritative store of categories and products, and the filters
//! product listings are queried with.

mod filter;
mod store;

pub use filter::ProductFilter;
pub use store::{CatalogStore, InMemoryCatalog};
