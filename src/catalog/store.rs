//! Catalog Store
//!
//! The authoritative record of categories and products. [`CatalogStore`] is
//! the seam the lookaside services persist through; [`InMemoryCatalog`] is
//! the in-process implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::catalog::ProductFilter;
use crate::error::{CatalogError, FieldErrors, Result};
use crate::models::{Category, CategoryData, Product, ProductData};

/// Persistence operations for catalog entities.
///
/// Lookups, updates and deletes of a missing id fail with
/// [`CatalogError::NotFound`] without changing anything.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: u64) -> Result<Category>;
    async fn insert_category(&self, data: CategoryData) -> Result<Category>;
    async fn update_category(&self, id: u64, data: CategoryData) -> Result<Category>;
    /// Deletes the category and every product that references it.
    async fn delete_category(&self, id: u64) -> Result<()>;

    /// Products matching every present filter, in id order.
    async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;
    async fn get_product(&self, id: u64) -> Result<Product>;
    /// Fails validation on `category` when it names no existing category.
    async fn insert_product(&self, data: ProductData) -> Result<Product>;
    async fn update_product(&self, id: u64, data: ProductData) -> Result<Product>;
    async fn delete_product(&self, id: u64) -> Result<()>;
}

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<u64, Category>,
    products: BTreeMap<u64, Product>,
    next_category_id: u64,
    next_product_id: u64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            products: BTreeMap::new(),
            next_category_id: 1,
            next_product_id: 1,
        }
    }
}

impl Tables {
    fn check_category_ref(&self, category: u64) -> Result<()> {
        if self.categories.contains_key(&category) {
            Ok(())
        } else {
            Err(CatalogError::Validation(FieldErrors::single(
                "category",
                format!("Invalid pk \"{}\" - object does not exist.", category),
            )))
        }
    }
}

// == In-Memory Catalog ==
/// Catalog held in ordered maps behind an async lock.
///
/// Ids are assigned from 1 upwards and never reused.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tables: RwLock<Tables>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: u64) -> Result<Category> {
        self.tables
            .read()
            .await
            .categories
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::category_not_found(id))
    }

    async fn insert_category(&self, data: CategoryData) -> Result<Category> {
        let mut tables = self.tables.write().await;
        let id = tables.next_category_id;
        tables.next_category_id += 1;

        let category = Category {
            id,
            name: data.name,
            description: data.description,
            created_at: Utc::now(),
        };
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: u64, data: CategoryData) -> Result<Category> {
        let mut tables = self.tables.write().await;
        let category = tables
            .categories
            .get_mut(&id)
            .ok_or_else(|| CatalogError::category_not_found(id))?;

        category.name = data.name;
        category.description = data.description;
        Ok(category.clone())
    }

    async fn delete_category(&self, id: u64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.categories.remove(&id).is_none() {
            return Err(CatalogError::category_not_found(id));
        }
        tables.products.retain(|_, product| product.category != id);
        Ok(())
    }

    async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let tables = self.tables.read().await;
        let products = tables
            .products
            .values()
            .filter(|product| {
                let category_name = tables
                    .categories
                    .get(&product.category)
                    .map(|c| c.name.as_str())
                    .unwrap_or_default();
                filter.matches(product, category_name)
            })
            .cloned()
            .collect();
        Ok(products)
    }

    async fn get_product(&self, id: u64) -> Result<Product> {
        self.tables
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    async fn insert_product(&self, data: ProductData) -> Result<Product> {
        let mut tables = self.tables.write().await;
        tables.check_category_ref(data.category)?;

        let id = tables.next_product_id;
        tables.next_product_id += 1;

        let now = Utc::now();
        let product = Product {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            created_at: now,
            updated_at: now,
        };
        tables.products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: u64, data: ProductData) -> Result<Product> {
        let mut tables = self.tables.write().await;
        if !tables.products.contains_key(&id) {
            return Err(CatalogError::product_not_found(id));
        }
        tables.check_category_ref(data.category)?;

        let product = tables
            .products
            .get_mut(&id)
            .ok_or_else(|| CatalogError::product_not_found(id))?;
        product.name = data.name;
        product.description = data.description;
        product.price = data.price;
        product.category = data.category;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: u64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CatalogError::product_not_found(id))
    }
}
