//! Error types for the todo front end
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the todo front end.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Downloading a new image from the image source failed
    #[error("Image fetch failed: {0}")]
    ImageFetch(String),

    /// Upstream todo API answered with a failure or could not be reached
    #[error("{message}")]
    Upstream {
        /// Upstream status, None when the request never got an answer
        status: Option<StatusCode>,
        message: String,
    },

    /// Filesystem error while reading or persisting the cache
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Maps the error to the HTTP status returned to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ImageFetch(_) => StatusCode::BAD_GATEWAY,
            AppError::Upstream { status, .. } => status.unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream {
            status: None,
            message: e.to_string(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Upstream failures pass their text through untouched
        if let AppError::Upstream { message, .. } = self {
            return (status, message).into_response();
        }

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the todo front end.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("Image not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ImageFetch("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Upstream {
                status: Some(StatusCode::BAD_REQUEST),
                message: "too long".into(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream {
                status: None,
                message: "connection refused".into(),
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_not_found_message_is_bare() {
        let err = AppError::NotFound("Image not found".into());
        assert_eq!(err.to_string(), "Image not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
