//! Store Catalog - category and product catalog API
//!
//! Serves catalog listings through a read-through cache that is invalidated
//! on every successful write.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
