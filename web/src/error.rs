//! Error types for web handlers.
//!
//! This module bridges [`ResultError`] into HTTP error responses through
//! Axum's `IntoResponse` trait.

use action_results_core::ResultError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(scope: RequestScope) -> Result<Response, AppError> {
///     let result = status_result(StatusCode::ACCEPTED, &scope);
///     respond(&result, CancellationToken::new()).await
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: String) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "INTERNAL_SERVER_ERROR".to_string(),
        )
    }

    /// HTTP status the error renders with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: String,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    "Internal server error"
                );
            }
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Result failures are pipeline bugs, so all of them surface as 500.
impl From<ResultError> for AppError {
    fn from(err: ResultError) -> Self {
        let code = match &err {
            ResultError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            released if *released == ResultError::CONTEXT_RELEASED => "CONTEXT_RELEASED",
            ResultError::InvalidState { .. } => "MISSING_REQUEST",
            ResultError::ResponseConstruction(_) => "RESPONSE_CONSTRUCTION",
        };

        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "The request could not be completed".to_string(),
            code.to_string(),
        )
        .with_source(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::internal("Boom");
        assert_eq!(err.to_string(), "[INTERNAL_SERVER_ERROR] Boom");
    }

    #[test]
    fn test_missing_request_maps_to_500() {
        let err = AppError::from(ResultError::MISSING_REQUEST);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "MISSING_REQUEST");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_released_context_has_own_code() {
        let err = AppError::from(ResultError::CONTEXT_RELEASED);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "CONTEXT_RELEASED");
    }

    #[test]
    fn test_invalid_argument_code() {
        let err = AppError::from(ResultError::invalid_argument("context"));
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = AppError::from(ResultError::ResponseConstruction("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
