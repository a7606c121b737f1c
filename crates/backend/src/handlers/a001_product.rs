use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde_json::json;

use contracts::domain::a001_product::{
    CategorySummary, Product, ProductDto, ProductListQuery, ProductMutationResponse, ProductPatch,
};

use crate::domain::a001_product;
use crate::shared::api_error::status_for;

/// GET /api/products?q=&category=
pub async fn list(
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    match a001_product::service::list(&query).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_for(&e)),
    }
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    match a001_product::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(status_for(&e)),
    }
}

/// POST /api/products
pub async fn create(
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductMutationResponse>), StatusCode> {
    match a001_product::service::create(dto).await {
        Ok(product) => Ok((
            StatusCode::CREATED,
            Json(ProductMutationResponse {
                success: true,
                data: Some(product),
            }),
        )),
        Err(e) => Err(status_for(&e)),
    }
}

/// PUT /api/products/:id
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductMutationResponse>, StatusCode> {
    match a001_product::service::update(&id, patch).await {
        Ok(product) => Ok(Json(ProductMutationResponse {
            success: true,
            data: Some(product),
        })),
        Err(e) => Err(status_for(&e)),
    }
}

/// DELETE /api/products/:id
pub async fn delete(Path(id): Path<String>) -> Result<Json<serde_json::Value>, StatusCode> {
    match a001_product::service::delete(&id).await {
        Ok(true) => Ok(Json(json!({"success": true}))),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(status_for(&e)),
    }
}

/// GET /api/categories
pub async fn list_categories() -> Result<Json<Vec<CategorySummary>>, StatusCode> {
    match a001_product::service::list_categories().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_for(&e)),
    }
}
