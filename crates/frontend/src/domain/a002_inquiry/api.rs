use contracts::domain::a002_inquiry::{InquiryCreatedResponse, InquiryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send the contact form to the inquiry relay
pub async fn submit_inquiry(dto: &InquiryDto) -> Result<InquiryCreatedResponse, String> {
    let url = api_url("/api/inquiries");

    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    match response.status() {
        200 | 201 => {}
        400 => return Err("Please check your name, email and message.".to_string()),
        status => return Err(format!("HTTP error: {}", status)),
    }

    response
        .json::<InquiryCreatedResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
