use contracts::domain::a001_product::Product;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the whole product catalog
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let url = api_url("/api/products");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
