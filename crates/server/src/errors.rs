use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::ApiResponse;
use service::errors::StoreError;
use thiserror::Error;
use tracing::error;

/// Error responder carrying the uniform response envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Log a store failure and answer 500 with the given user-facing message.
    pub fn storage(err: StoreError, message: impl Into<String>) -> Self {
        let message = message.into();
        error!(error = %err, "store operation failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_500() {
        let err = ApiError::storage(
            StoreError::Storage("disk on fire".into()),
            "An error occurred while retrieving contacts",
        );
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::not_found("Contact not found").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
