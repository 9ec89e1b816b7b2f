use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::repository::RepositoryError;

/// ApiError
///
/// The full error taxonomy of the request boundary. Every handler returns
/// `Result<_, ApiError>`, and the `IntoResponse` implementation below converts
/// each variant into the structured JSON envelope the clients expect:
/// `{ "success": false, "message": ..., "error"?: ... }`.
///
/// No error is allowed to propagate unhandled past the handler boundary, and
/// nothing is retried: a failure is rendered and returned immediately.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No matching account or entity (404).
    #[error("{0}")]
    NotFound(String),
    /// Credentials were recognised but wrong, e.g. a bad password (401).
    #[error("{0}")]
    Unauthorized(String),
    /// Duplicate record, e.g. an already-taken username (400).
    #[error("{0}")]
    Conflict(String),
    /// Payload rejected before any write, e.g. the password policy (400).
    #[error("{0}")]
    Validation(String),
    /// No bearer token was presented on a protected route (401).
    #[error("{0}")]
    Unauthenticated(String),
    /// A token was presented but is malformed, tampered with, or expired (403).
    #[error("{0}")]
    Forbidden(String),
    /// Unexpected store or runtime failure (500). The detail string is carried
    /// in the envelope's `error` field, mirroring the message clients log.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m, None),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m, None),
            // The duplicate-username contract is 400, not 409.
            ApiError::Conflict(m) => (StatusCode::BAD_REQUEST, m, None),
            ApiError::Validation(m) => (StatusCode::BAD_REQUEST, m, None),
            ApiError::Unauthenticated(m) => (StatusCode::UNAUTHORIZED, m, None),
            ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m, None),
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    Some(detail),
                )
            }
        };

        let mut body = json!({ "success": false, "message": message });
        if let Some(detail) = detail {
            body["error"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(m) => ApiError::Conflict(m),
            RepositoryError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
