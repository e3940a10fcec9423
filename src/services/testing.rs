//! Test doubles for the lookaside services.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::cache::{CacheService, CacheStats};
use crate::catalog::{CatalogStore, InMemoryCatalog, ProductFilter};
use crate::error::{CatalogError, Result};
use crate::models::{Category, CategoryData, Product, ProductData};

/// In-memory catalog that counts listing reads.
#[derive(Default)]
pub struct CountingCatalog {
    inner: InMemoryCatalog,
    category_lists: AtomicUsize,
    product_filters: AtomicUsize,
}

impl CountingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_lists(&self) -> usize {
        self.category_lists.load(Ordering::SeqCst)
    }

    pub fn product_filters(&self) -> usize {
        self.product_filters.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogStore for CountingCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.category_lists.fetch_add(1, Ordering::SeqCst);
        self.inner.list_categories().await
    }

    async fn get_category(&self, id: u64) -> Result<Category> {
        self.inner.get_category(id).await
    }

    async fn insert_category(&self, data: CategoryData) -> Result<Category> {
        self.inner.insert_category(data).await
    }

    async fn update_category(&self, id: u64, data: CategoryData) -> Result<Category> {
        self.inner.update_category(id, data).await
    }

    async fn delete_category(&self, id: u64) -> Result<()> {
        self.inner.delete_category(id).await
    }

    async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.product_filters.fetch_add(1, Ordering::SeqCst);
        self.inner.filter_products(filter).await
    }

    async fn get_product(&self, id: u64) -> Result<Product> {
        self.inner.get_product(id).await
    }

    async fn insert_product(&self, data: ProductData) -> Result<Product> {
        self.inner.insert_product(data).await
    }

    async fn update_product(&self, id: u64, data: ProductData) -> Result<Product> {
        self.inner.update_product(id, data).await
    }

    async fn delete_product(&self, id: u64) -> Result<()> {
        self.inner.delete_product(id).await
    }
}

/// Cache backend that is always down.
pub struct UnreachableCache;

fn down() -> CatalogError {
    CatalogError::CacheUnavailable("connection refused".to_string())
}

#[async_trait]
impl CacheService for UnreachableCache {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(down())
    }

    async fn set(&self, _key: &str, _value: String, _ttl_seconds: u64) -> Result<()> {
        Err(down())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Err(down())
    }

    async fn delete_prefix(&self, _prefix: &str) -> Result<usize> {
        Err(down())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Err(down())
    }
}
