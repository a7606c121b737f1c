use super::repository;
use crate::shared::api_error::ServiceError;
use contracts::domain::a002_inquiry::{Inquiry, InquiryDto};
use uuid::Uuid;

/// Validate and store a contact inquiry.
///
/// Delivery to a mailbox is handled outside this service; the stored row and
/// the log line are the record of the request.
pub async fn submit(dto: InquiryDto) -> anyhow::Result<Uuid> {
    let inquiry = Inquiry::new_for_insert(dto);
    inquiry.validate().map_err(ServiceError::from)?;

    let id = repository::insert(&inquiry).await?;
    tracing::info!(
        inquiry_id = %id,
        from = %inquiry.email,
        chars = inquiry.message.chars().count(),
        "Inquiry received from {}",
        inquiry.name
    );
    Ok(id)
}

pub async fn list_all() -> anyhow::Result<Vec<Inquiry>> {
    repository::list_all().await
}
