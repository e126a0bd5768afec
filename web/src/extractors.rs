//! Custom Axum extractors.
//!
//! - `RequestScope`: a [`ControllerContext`] holding the head of the
//!   request being handled, for building deferred results.
//!
//! # Examples
//!
//! ```ignore
//! use action_results_web::{RequestScope, respond, status_result};
//!
//! async fn handler(scope: RequestScope) -> WebResult<Response> {
//!     respond(&status_result(StatusCode::NO_CONTENT, &scope), CancellationToken::new()).await
//! }
//! ```

use action_results_core::ControllerContext;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, Request},
};
use std::sync::Arc;

/// Controller context scoped to the current request.
///
/// Only the request head is captured (method, URI, version, headers).
/// Results built from the scope hold the context weakly, so the scope must
/// outlive their execution.
#[derive(Debug, Clone)]
pub struct RequestScope(pub Arc<ControllerContext>);

impl RequestScope {
    /// A scope whose context has no request yet.
    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::new(ControllerContext::new()))
    }

    /// The underlying context.
    #[must_use]
    pub const fn context(&self) -> &Arc<ControllerContext> {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestScope
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let (mut head, ()) = Request::new(()).into_parts();
        head.method = parts.method.clone();
        head.uri = parts.uri.clone();
        head.version = parts.version;
        head.headers = parts.headers.clone();

        let context = ControllerContext::with_request(Arc::new(head));

        Ok(Self(Arc::new(context)))
    }
}
