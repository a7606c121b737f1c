use axum::http::StatusCode;
use contracts::domain::common::ValidationError;
use thiserror::Error;

/// Failure kinds a service reports through `anyhow::Error`.
///
/// Handlers recover the kind with [`status_for`]; anything that is not a
/// `ServiceError` is an internal failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::Validation(e.to_string())
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Map a service error to the response status, logging server-side failures
pub fn status_for(err: &anyhow::Error) -> StatusCode {
    let status = err
        .downcast_ref::<ServiceError>()
        .map(ServiceError::status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        tracing::error!("request failed: {:#}", err);
    } else {
        tracing::warn!("request rejected: {}", err);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = anyhow::Error::new(ServiceError::Validation("name".into()));
        let missing = anyhow::Error::new(ServiceError::NotFound("product p-1".into()));
        let other = anyhow::anyhow!("disk full");

        assert_eq!(status_for(&validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&missing), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&other), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_wrapped_database_error_is_internal() {
        let err = anyhow::Error::new(sea_orm::DbErr::Custom("locked".into()))
            .context("loading products");
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ServiceError = ValidationError::Blank("email").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
