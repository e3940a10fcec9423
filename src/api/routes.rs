//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_category_handler, create_product_handler, delete_category_handler,
    delete_product_handler, get_category_handler, get_product_handler, health_handler,
    list_categories_handler, list_products_handler, stats_handler, update_category_handler,
    update_product_handler, AppState,
};

/// Prefix the catalog resources are mounted under
pub const API_PREFIX: &str = "/api";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|POST /api/categories`
/// - `GET|PUT|DELETE /api/categories/:id`
/// - `GET|POST /api/products` (list accepts `category`, `price_min`, `price_max`)
/// - `GET|PUT|DELETE /api/products/:id`
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog = Router::new()
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/categories/:id",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        );

    Router::new()
        .nest(API_PREFIX, catalog)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
