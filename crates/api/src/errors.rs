use crate::dto::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dns_lookup_domain::{DomainError, ErrorKind};

pub const VALIDATION_ERROR: &str = "Validation error";
pub const VALIDATION_MESSAGE: &str = "Invalid request parameters.";
pub const LOOKUP_FAILED: &str = "DNS lookup failed";
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0.kind() {
            // Field-level detail stays in the logs.
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(VALIDATION_ERROR, VALIDATION_MESSAGE)),
            )
                .into_response(),

            ErrorKind::Configuration => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
            }

            ErrorKind::Resolution => {
                let message = self.0.to_string();
                let message = if message.is_empty() {
                    FALLBACK_MESSAGE.to_string()
                } else {
                    message
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(LOOKUP_FAILED, message)),
                )
                    .into_response()
            }
        }
    }
}
