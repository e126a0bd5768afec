//! Axum integration for action results.
//!
//! This crate is the hosting side of [`action_results_core`]: it gives
//! handlers a request-scoped [`ControllerContext`](action_results_core::ControllerContext),
//! executes results, and turns execution failures into HTTP error responses.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** a [`RequestScope`] holding the request head
//! 3. **Build** a deferred result with [`status_result`]
//! 4. **Execute** it with [`respond`]
//! 5. **Map failures** to [`AppError`] (500 with a JSON body)
//!
//! # Example
//!
//! ```ignore
//! use action_results_web::{respond, status_result, RequestScope, WebResult};
//! use axum::{http::StatusCode, response::Response, routing::delete, Router};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn remove(scope: RequestScope) -> WebResult<Response> {
//!     let result = status_result(StatusCode::NO_CONTENT, &scope);
//!     respond(&result, CancellationToken::new()).await
//! }
//!
//! let app = Router::new().route("/api/v1/items/:id", delete(remove));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod responder;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::RequestScope;
pub use responder::{respond, status_result, WebStatusResult};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
