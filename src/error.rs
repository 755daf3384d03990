//! API error type shared by the route handlers.
//!
//! The error surface is deliberately narrow: a submission can fail
//! validation (returned to the client as a structured field-error list), and
//! everything else — malformed bodies included — collapses into a generic
//! server error whose detail is logged but never echoed back.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::contact::FieldError;

/// Errors a route handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more submitted fields failed validation.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Unexpected server-side fault. The detail is logged; the client gets
    /// a generic message.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "status": "error",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("server error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "status": "error",
                        "message": "Internal server error",
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_renders_400_with_field_list() {
        let error = ApiError::Validation(vec![FieldError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        }]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_renders_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_counts_failing_fields() {
        let error = ApiError::Validation(vec![
            FieldError {
                field: "name".to_string(),
                message: "Name is required".to_string(),
            },
            FieldError {
                field: "email".to_string(),
                message: "Please provide a valid email".to_string(),
            },
        ]);
        assert_eq!(error.to_string(), "validation failed for 2 field(s)");
    }
}
