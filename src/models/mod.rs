//! Catalog entities and request/response models
//!
//! Entities are what the catalog store holds and the cache serializes;
//! the DTOs shape HTTP request and response bodies.

pub mod catalog;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use catalog::{Category, CategoryData, Product, ProductData};
pub use requests::{CategoryPayload, ProductListQuery, ProductPayload};
pub use responses::{HealthResponse, MessageResponse, StatsResponse};
