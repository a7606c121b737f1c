use axum::{http::StatusCode, Json};

use contracts::domain::a002_inquiry::{Inquiry, InquiryCreatedResponse, InquiryDto};

use crate::domain::a002_inquiry;
use crate::shared::api_error::status_for;

/// POST /api/inquiries
pub async fn submit(
    Json(dto): Json<InquiryDto>,
) -> Result<(StatusCode, Json<InquiryCreatedResponse>), StatusCode> {
    match a002_inquiry::service::submit(dto).await {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(InquiryCreatedResponse { id: id.to_string() }),
        )),
        Err(e) => Err(status_for(&e)),
    }
}

/// GET /api/inquiries
pub async fn list_all() -> Result<Json<Vec<Inquiry>>, StatusCode> {
    match a002_inquiry::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_for(&e)),
    }
}
