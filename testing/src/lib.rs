//! # Action Results Testing
//!
//! Testing utilities for action results.
//!
//! This crate provides:
//! - Request builders for tests
//! - A request context that counts how often it is queried
//! - A response factory that can fail after allocation and tracks leaks
//!
//! ## Example
//!
//! ```
//! use action_results_core::{ActionResult, StatusCodeResult};
//! use action_results_testing::{mocks::CountingContext, request};
//! use http::StatusCode;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! let context = Arc::new(CountingContext::new());
//! let result = StatusCodeResult::for_context(StatusCode::OK, &context);
//!
//! context.set_request(request("/"));
//! let response = futures::executor::block_on(result.execute(CancellationToken::new()));
//! assert_eq!(response.map(|r| r.status()), Ok(StatusCode::OK));
//! assert_eq!(context.queries(), 1);
//! ```

#![allow(clippy::missing_panics_doc)] // Test utilities document panics where critical

use action_results_core::SharedRequest;
use http::{Method, Request};
use std::sync::Arc;

pub mod mocks;

/// Build a shared `GET` request head for `uri`.
///
/// # Panics
///
/// Panics if `uri` is not a valid URI.
#[must_use]
pub fn request(uri: &str) -> SharedRequest {
    request_with_method(Method::GET, uri)
}

/// Build a shared request head with the given method.
///
/// # Panics
///
/// Panics if `uri` is not a valid URI.
#[must_use]
#[allow(clippy::expect_used)]
pub fn request_with_method(method: Method, uri: &str) -> SharedRequest {
    let (parts, ()) = Request::builder()
        .method(method)
        .uri(uri)
        .body(())
        .expect("Valid request")
        .into_parts();
    Arc::new(parts)
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
