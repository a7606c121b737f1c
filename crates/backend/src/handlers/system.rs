use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /api/ping
pub async fn ping() -> Json<Value> {
    Json(json!({"status": "pong", "message": "API is live!"}))
}
