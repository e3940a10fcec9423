//! Category operations with a single-key listing cache.

use std::sync::Arc;

use tracing::info;

use super::{invalidate_key, invalidate_prefix, read_through};
use crate::cache::{CacheService, CATEGORIES_KEY, PRODUCTS_PREFIX};
use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::models::{Category, CategoryPayload};

/// Categories are cached as one listing under [`CATEGORIES_KEY`].
#[derive(Clone)]
pub struct CategoryService {
    catalog: Arc<dyn CatalogStore>,
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl CategoryService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        cache: Arc<dyn CacheService>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            catalog,
            cache,
            ttl_seconds,
        }
    }

    /// All categories, served from cache when present.
    pub async fn list(&self) -> Result<Vec<Category>> {
        read_through(self.cache.as_ref(), CATEGORIES_KEY, self.ttl_seconds, || {
            self.catalog.list_categories()
        })
        .await
    }

    /// One category, straight from the catalog.
    pub async fn retrieve(&self, id: u64) -> Result<Category> {
        self.catalog.get_category(id).await
    }

    pub async fn create(&self, payload: CategoryPayload) -> Result<Category> {
        let data = payload.validate()?;
        let category = self.catalog.insert_category(data).await?;
        info!(id = category.id, name = %category.name, "category created");

        invalidate_key(self.cache.as_ref(), CATEGORIES_KEY).await;
        Ok(category)
    }

    /// Full replacement. Also sweeps product listings, since they are
    /// filtered by category name.
    pub async fn update(&self, id: u64, payload: CategoryPayload) -> Result<Category> {
        self.catalog.get_category(id).await?;
        let data = payload.validate()?;
        let category = self.catalog.update_category(id, data).await?;
        info!(id, name = %category.name, "category updated");

        invalidate_key(self.cache.as_ref(), CATEGORIES_KEY).await;
        invalidate_prefix(self.cache.as_ref(), PRODUCTS_PREFIX).await;
        Ok(category)
    }

    /// Deletes the category and its products.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.catalog.delete_category(id).await?;
        info!(id, "category deleted");

        invalidate_key(self.cache.as_ref(), CATEGORIES_KEY).await;
        invalidate_prefix(self.cache.as_ref(), PRODUCTS_PREFIX).await;
        Ok(())
    }
}
