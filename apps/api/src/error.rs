//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error for the API. It wraps the layer
//! errors from core, db and media and implements `IntoResponse`, so
//! handlers can simply return `Result<_, AppError>` and use `?`.
//!
//! ## Status Mapping
//! ```text
//! ValidationError / CoreError  → 400 Bad Request
//! DbError::NotFound            → 404 Not Found
//! DbError::Conflict            → 409 Conflict
//! DbError::UniqueViolation     → 409 Conflict
//! everything else              → 500 Internal Server Error
//!                                (detail logged, generic body returned)
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use gamevault_core::{CoreError, ValidationError};
use gamevault_db::DbError;
use gamevault_media::MediaError;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation failure. Always a 400.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Business rule violation (e.g. mutating a finalized cart). 400.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Database layer error. NotFound and Conflict map to 404/409, the
    /// rest are 500s.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Blob store error. Always a 500.
    #[error(transparent)]
    Media(#[from] MediaError),

    /// Resource not found, with a caller-facing message.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request, with a caller-facing message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a detail message that is only logged.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &str, id: &str) -> Self {
        AppError::NotFound(format!("{entity} not found: {id}"))
    }
}

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Core(err) => (StatusCode::BAD_REQUEST, err.to_string()),

            AppError::Db(DbError::NotFound { .. }) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Db(DbError::Conflict { .. }) => (StatusCode::CONFLICT, self.to_string()),
            AppError::Db(DbError::UniqueViolation { .. }) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::Db(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }

            AppError::Media(err) => {
                tracing::error!(error = %err, "Blob store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }

            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),

            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

/// Result type for handlers and services.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Unit Tests
// =============================================================================
