use axum::{routing::get, Router};

use crate::handlers;

/// Configure all application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(handlers::system::health))
        .route("/api/ping", get(handlers::system::ping))
        // ========================================
        // A001 PRODUCT CATALOG
        // ========================================
        .route(
            "/api/products",
            get(handlers::a001_product::list).post(handlers::a001_product::create),
        )
        .route(
            "/api/products/:id",
            get(handlers::a001_product::get_by_id)
                .put(handlers::a001_product::update)
                .delete(handlers::a001_product::delete),
        )
        .route(
            "/api/categories",
            get(handlers::a001_product::list_categories),
        )
        // ========================================
        // A002 CONTACT INQUIRIES
        // ========================================
        .route(
            "/api/inquiries",
            get(handlers::a002_inquiry::list_all).post(handlers::a002_inquiry::submit),
        )
}
