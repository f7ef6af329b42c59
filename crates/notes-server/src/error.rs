//! API error types and the error-normalization boundary.
//!
//! `ApiError` is the only error type handlers return. Its `IntoResponse`
//! impl is the single point where failures become client-facing JSON:
//! the four client kinds map to `{"status":"fail","message":...}` with
//! their fixed status codes, and everything else collapses into an opaque
//! 500 envelope that never echoes internal detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use notes_core::ValidationError;
use notes_store::StoreError;

/// Body sent for the internal (500) path; the underlying error is logged,
/// never serialized.
pub const INTERNAL_ERROR_MESSAGE: &str = "an unexpected error occurred on our side";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Forbidden — authenticated but not entitled (403).
    #[error("{0}")]
    Forbidden(String),

    /// Unauthorized — missing or invalid credential (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error; the variant decides the status code.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::NoteNotFound(_) | StoreError::UserNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                StoreError::UsernameTaken(_) | StoreError::RefreshTokenNotFound => {
                    StatusCode::BAD_REQUEST
                }
                StoreError::NotNoteOwner(_) => StatusCode::FORBIDDEN,
                StoreError::Database(_) | StoreError::Migration(_) | StoreError::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

/// JSON failure envelope: `{"status": "fail" | "error", "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// `"fail"` for client errors, `"error"` for internal failures.
    pub status: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed unexpectedly");
            let body = ErrorBody {
                status: "error",
                message: INTERNAL_ERROR_MESSAGE.to_string(),
            };
            return (status, Json(body)).into_response();
        }

        let body = ErrorBody {
            status: "fail",
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn client_kinds_map_to_fixed_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_map_through() {
        assert_eq!(
            ApiError::from(StoreError::NoteNotFound(Uuid::nil())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::NotNoteOwner(Uuid::nil())).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(StoreError::UsernameTaken("alice".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::RefreshTokenNotFound).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Config("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_passes_through_unprefixed() {
        let err = ApiError::BadRequest("title is required".into());
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn validation_errors_become_bad_requests() {
        let err: ApiError = notes_core::validate_note_payload(&notes_core::NotePayload {
            title: String::new(),
            body: "b".into(),
            tags: vec![],
        })
        .unwrap_err()
        .into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
