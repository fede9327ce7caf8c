//! Warung — service and startup error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::envelope::ErrorResponse;

/// Request-scoped error shared by all handler code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input (400).
    #[error("validation error: {0}")]
    Validation(String),

    /// Target row does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The embedded SQL engine failed (500).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An outbound call to another service failed (500).
    #[error("{context}: {detail}")]
    Upstream {
        /// Which call failed.
        context: String,
        /// Client or status error text.
        detail: String,
    },

    /// Invariant broken inside the service itself (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message, None))
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, ErrorResponse::new(message, None)),
            Self::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Database error", Some(err.to_string())),
            ),
            Self::Upstream { context, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(context, Some(detail)),
            ),
            Self::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Internal server error", Some(detail)),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Errors that abort service startup. A non-`Ok` return from `main`
/// yields a non-zero exit code.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or filesystem error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(ServiceError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(ServiceError::NotFound("user 7 not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_database_maps_to_500() {
        assert_eq!(
            status_of(ServiceError::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let err = ServiceError::Upstream {
            context: "failed to fetch user".into(),
            detail: "connection refused".into(),
        };
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(
            status_of(ServiceError::Internal("corrupt items column".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
