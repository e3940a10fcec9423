//! Product operations with a per-filter listing cache.
//!
//! Every filter combination gets its own entry under [`PRODUCTS_PREFIX`].
//! A write can move a product in or out of any of them (a price edit crosses
//! a bound, a category change alters the name match), so each committed
//! write sweeps the whole namespace rather than guessing which entries are
//! affected.

use std::sync::Arc;

use tracing::info;

use super::{invalidate_prefix, read_through};
use crate::cache::{product_list_key, CacheService, PRODUCTS_PREFIX};
use crate::catalog::{CatalogStore, ProductFilter};
use crate::error::Result;
use crate::models::{Product, ProductPayload};

#[derive(Clone)]
pub struct ProductService {
    catalog: Arc<dyn CatalogStore>,
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl ProductService {
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

    /// Products matching `filter`, served from that filter's cache entry
    /// when present.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let key = product_list_key(filter);
        read_through(self.cache.as_ref(), &key, self.ttl_seconds, || {
            self.catalog.filter_products(filter)
        })
        .await
    }

    /// One product, straight from the catalog.
    pub async fn retrieve(&self, id: u64) -> Result<Product> {
        self.catalog.get_product(id).await
    }

    pub async fn create(&self, payload: ProductPayload) -> Result<Product> {
        let data = payload.validate()?;
        let product = self.catalog.insert_product(data).await?;
        info!(id = product.id, name = %product.name, price = %product.price, "product created");

        invalidate_prefix(self.cache.as_ref(), PRODUCTS_PREFIX).await;
        Ok(product)
    }

    /// Full replacement of an existing product.
    pub async fn update(&self, id: u64, payload: ProductPayload) -> Result<Product> {
        self.catalog.get_product(id).await?;
        let data = payload.validate()?;
        let product = self.catalog.update_product(id, data).await?;
        info!(id, price = %product.price, "product updated");

        invalidate_prefix(self.cache.as_ref(), PRODUCTS_PREFIX).await;
        Ok(product)
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.catalog.delete_product(id).await?;
        info!(id, "product deleted");

        invalidate_prefix(self.cache.as_ref(), PRODUCTS_PREFIX).await;
        Ok(())
    }
}
