//! API Handlers
//!
//! HTTP request handlers for the catalog endpoints. Handlers only parse and
//! shape requests; caching and persistence live in the services.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::cache::{CacheService, InMemoryCache};
use crate::catalog::{CatalogStore, InMemoryCatalog, ProductFilter};
use crate::error::{CatalogError, Result};
use crate::models::{
    Category, CategoryPayload, HealthResponse, MessageResponse, Product, ProductListQuery,
    ProductPayload, StatsResponse,
};
use crate::services::{CategoryService, ProductService};

/// Application state shared across all handlers.
///
/// Built from explicitly injected catalog and cache backends.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires both services to the given backends.
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        cache: Arc<dyn CacheService>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            categories: CategoryService::new(catalog.clone(), cache.clone(), ttl_seconds),
            products: ProductService::new(catalog, cache.clone(), ttl_seconds),
            cache,
        }
    }

    /// State over fresh in-process backends.
    pub fn in_memory(ttl_seconds: u64) -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(InMemoryCache::new()),
            ttl_seconds,
        )
    }
}

/// Unwraps a JSON body, turning parse failures into 400s.
fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))
}

/// Parses an `/:id` segment. Anything that is not a plain unsigned integer
/// cannot name an entity and is reported as not found.
fn path_id(entity: &'static str, raw: &str) -> Result<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::unknown_id(entity, raw));
    }
    raw.parse()
        .map_err(|_| CatalogError::unknown_id(entity, raw))
}

// == Categories ==

/// Handler for GET /categories
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.categories.list().await?))
}

/// Handler for POST /categories
pub async fn create_category_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = state.categories.create(json_body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Handler for GET /categories/:id
pub async fn get_category_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Category>> {
    let id = path_id("Category", &raw)?;
    Ok(Json(state.categories.retrieve(id).await?))
}

/// Handler for PUT /categories/:id
pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: std::result::Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<Json<Category>> {
    let id = path_id("Category", &raw)?;
    let payload = json_body(payload)?;
    Ok(Json(state.categories.update(id, payload).await?))
}

/// Handler for DELETE /categories/:id
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<StatusCode> {
    let id = path_id("Category", &raw)?;
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// == Products ==

/// Handler for GET /products?category=&price_min=&price_max=
pub async fn list_products_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(pairs) =
        query.map_err(|rejection| CatalogError::InvalidRequest(rejection.body_text()))?;
    let filter = ProductFilter::from_query(ProductListQuery::from_pairs(pairs))?;
    Ok(Json(state.products.list(&filter).await?))
}

/// Handler for POST /products
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.products.create(json_body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for GET /products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Product>> {
    let id = path_id("Product", &raw)?;
    Ok(Json(state.products.retrieve(id).await?))
}

/// Handler for PUT /products/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: std::result::Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>> {
    let id = path_id("Product", &raw)?;
    let payload = json_body(payload)?;
    Ok(Json(state.products.update(id, payload).await?))
}

/// Handler for DELETE /products/:id
///
/// Responds 204 with a confirmation message.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = path_id("Product", &raw)?;
    state.products.delete(id).await?;
    Ok((StatusCode::NO_CONTENT, Json(MessageResponse::product_deleted())))
}

// == Service ==

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let stats = state.cache.stats().await?;
    Ok(Json(StatsResponse::from(stats)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category_payload(name: &str) -> std::result::Result<Json<CategoryPayload>, JsonRejection> {
        Ok(Json(CategoryPayload {
            name: Some(name.to_string()),
            description: None,
        }))
    }

    #[tokio::test]
    async fn test_create_and_list_categories() {
        let state = AppState::in_memory(300);

        let (status, Json(created)) =
            create_category_handler(State(state.clone()), category_payload("Shoes"))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(listed) = list_categories_handler(State(state)).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_get_missing_category() {
        let state = AppState::in_memory(300);
        let result = get_category_handler(State(state), Path("1".to_string())).await;
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let state = AppState::in_memory(300);
        let (_, Json(shoes)) =
            create_category_handler(State(state.clone()), category_payload("Shoes"))
                .await
                .unwrap();

        let payload: ProductPayload =
            serde_json::from_value(json!({"name": "Sneaker", "price": 15, "category": shoes.id}))
                .unwrap();
        let (status, Json(sneaker)) =
            create_product_handler(State(state.clone()), Ok(Json(payload)))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let query = vec![("category".to_string(), "shoe".to_string())];
        let Json(listed) = list_products_handler(State(state.clone()), Ok(Query(query)))
            .await
            .unwrap();
        assert_eq!(listed, vec![sneaker.clone()]);

        let (status, _) = delete_product_handler(State(state.clone()), Path(sneaker.id.to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(get_product_handler(State(state), Path(sneaker.id.to_string()))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_list_products_rejects_bad_bounds() {
        let state = AppState::in_memory(300);
        let query = vec![("price_min".to_string(), "cheap".to_string())];
        let result = list_products_handler(State(state.clone()), Ok(Query(query))).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        let Json(stats) = stats_handler(State(state)).await.unwrap();
        assert_eq!(stats.hits + stats.misses, 0);
    }

    #[test]
    fn test_path_id_accepts_only_unsigned_integers() {
        assert_eq!(path_id("Product", "42").unwrap(), 42);
        for raw in ["abc", "-1", "+1", "1.5", "", "99999999999999999999999"] {
            assert!(
                matches!(path_id("Product", raw), Err(CatalogError::NotFound { .. })),
                "{:?} should be not found",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
