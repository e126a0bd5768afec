//! Status code results.
//!
//! A [`StatusCodeResult`] means "respond with status X to the request that
//! produced this action". It is built once, executed once by the hosting
//! pipeline through [`ActionResult::execute`], then discarded.
//!
//! # Example
//!
//! ```
//! use action_results_core::{ActionResult, StatusCodeResult, originating_request};
//! use http::{Request, StatusCode};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (parts, ()) = Request::get("/orders/7").body(())?.into_parts();
//! let request = Arc::new(parts);
//!
//! let result = StatusCodeResult::not_found(Arc::clone(&request));
//! let response = futures::executor::block_on(result.execute(CancellationToken::new()))?;
//!
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! assert!(originating_request(&response).is_some_and(|r| Arc::ptr_eq(r, &request)));
//! # Ok(())
//! # }
//! ```

use crate::context::{RequestContext, SharedRequest};
use crate::error::Result;
use crate::provider::{DeferredProvider, DirectProvider, RequestProvider};
use crate::response::{HttpResponseFactory, ResponseFactory};
use futures::future::{self, Ready};
use http::StatusCode;
use std::future::Future;
use std::sync::{Arc, Weak};
use tokio_util::sync::CancellationToken;

/// Something the framework executes to produce a response.
pub trait ActionResult {
    /// Response type produced on success.
    type Response;

    /// Future returned by [`ActionResult::execute`].
    type Future: Future<Output = Result<Self::Response>> + Send;

    /// Produce the response.
    fn execute(&self, cancellation: CancellationToken) -> Self::Future;
}

/// Responds with a fixed status code to the originating request.
#[derive(Debug)]
pub struct StatusCodeResult<F = HttpResponseFactory> {
    status: StatusCode,
    provider: RequestProvider,
    factory: F,
}

impl StatusCodeResult {
    /// Respond with `status` to a known request.
    #[must_use]
    pub fn new(status: StatusCode, request: SharedRequest) -> Self {
        Self::from_provider(status, DirectProvider::new(request).into())
    }

    /// Respond with `status` to a request that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResultError::InvalidArgument`] if `request` is `None`.
    pub fn try_new(status: StatusCode, request: Option<SharedRequest>) -> Result<Self> {
        Ok(Self::from_provider(
            status,
            DirectProvider::try_new(request)?.into(),
        ))
    }

    /// Respond with `status` to whatever request `context` holds at
    /// execution time. The context is not queried here.
    #[must_use]
    pub fn for_context<C>(status: StatusCode, context: &Arc<C>) -> Self
    where
        C: RequestContext + 'static,
    {
        Self::from_provider(status, DeferredProvider::from_context(context).into())
    }

    /// Like [`StatusCodeResult::for_context`], from a weak handle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResultError::InvalidArgument`] if `context` is dangling.
    pub fn for_weak_context(status: StatusCode, context: Weak<dyn RequestContext>) -> Result<Self> {
        Ok(Self::from_provider(
            status,
            DeferredProvider::new(context)?.into(),
        ))
    }

    /// 200 OK.
    #[must_use]
    pub fn ok(request: SharedRequest) -> Self {
        Self::new(StatusCode::OK, request)
    }

    /// 204 No Content.
    #[must_use]
    pub fn no_content(request: SharedRequest) -> Self {
        Self::new(StatusCode::NO_CONTENT, request)
    }

    /// 400 Bad Request.
    #[must_use]
    pub fn bad_request(request: SharedRequest) -> Self {
        Self::new(StatusCode::BAD_REQUEST, request)
    }

    /// 401 Unauthorized.
    #[must_use]
    pub fn unauthorized(request: SharedRequest) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, request)
    }

    /// 404 Not Found.
    #[must_use]
    pub fn not_found(request: SharedRequest) -> Self {
        Self::new(StatusCode::NOT_FOUND, request)
    }

    /// 409 Conflict.
    #[must_use]
    pub fn conflict(request: SharedRequest) -> Self {
        Self::new(StatusCode::CONFLICT, request)
    }

    /// 500 Internal Server Error.
    #[must_use]
    pub fn internal_server_error(request: SharedRequest) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, request)
    }

    const fn from_provider(status: StatusCode, provider: RequestProvider) -> Self {
        Self {
            status,
            provider,
            factory: HttpResponseFactory::new(),
        }
    }
}

impl<F> StatusCodeResult<F> {
    /// Use `factory` to build the response instead.
    #[must_use]
    pub fn with_factory<G>(self, factory: G) -> StatusCodeResult<G> {
        StatusCodeResult {
            status: self.status,
            provider: self.provider,
            factory,
        }
    }

    /// The status code the response will carry.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status
    }

    /// The originating request, resolving a deferred one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResultError::InvalidState`] if a deferred context
    /// cannot supply a request.
    pub fn request(&self) -> Result<SharedRequest> {
        self.provider.request()
    }

    /// The provider backing [`StatusCodeResult::request`].
    #[must_use]
    pub const fn provider(&self) -> &RequestProvider {
        &self.provider
    }
}

impl<F: ResponseFactory> StatusCodeResult<F> {
    fn build_response(&self) -> Result<F::Response> {
        let mut response = self.factory.allocate(self.status)?;
        // From here on `response` is dropped on any early return.
        let request = self.provider.request()?;
        self.factory.attach_request(&mut response, request)?;
        Ok(response)
    }
}

impl<F: ResponseFactory> ActionResult for StatusCodeResult<F> {
    type Response = F::Response;
    type Future = Ready<Result<F::Response>>;

    fn execute(&self, _cancellation: CancellationToken) -> Self::Future {
        tracing::debug!(status = %self.status, "Executing status code result");
        future::ready(self.build_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ControllerContext;
    use crate::error::ResultError;
    use crate::response::originating_request;
    use http::Request;

    fn request(uri: &str) -> SharedRequest {
        let (parts, ()) = Request::get(uri)
            .body(())
            .expect("Valid request")
            .into_parts();
        Arc::new(parts)
    }

    #[test]
    fn test_result_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusCodeResult>();
    }

    #[tokio::test]
    async fn test_execute_direct() {
        let req = request("/a");
        let result = StatusCodeResult::new(StatusCode::OK, Arc::clone(&req));

        let response = result
            .execute(CancellationToken::new())
            .await
            .expect("Should execute");

        assert_eq!(response.status(), StatusCode::OK);
        let attached = originating_request(&response).expect("Request attached");
        assert!(Arc::ptr_eq(attached, &req));
    }

    #[test]
    fn test_try_new_rejects_none() {
        let err = StatusCodeResult::try_new(StatusCode::OK, None).expect_err("Must fail");
        assert_eq!(err, ResultError::invalid_argument("request"));
    }

    #[test]
    fn test_for_weak_context_rejects_dangling() {
        let dangling: Weak<ControllerContext> = Weak::new();
        let err = StatusCodeResult::for_weak_context(StatusCode::OK, dangling)
            .expect_err("Must fail");
        assert_eq!(err, ResultError::invalid_argument("context"));
    }

    #[tokio::test]
    async fn test_execute_without_request_fails() {
        let context = Arc::new(ControllerContext::new());
        let result = StatusCodeResult::for_context(StatusCode::NOT_FOUND, &context);

        let err = result
            .execute(CancellationToken::new())
            .await
            .expect_err("No request yet");
        assert!(err.is_invalid_state());
    }

    #[tokio::test]
    async fn test_cancelled_token_is_ignored() {
        let token = CancellationToken::new();
        token.cancel();

        let response = StatusCodeResult::no_content(request("/"))
            .execute(token)
            .await
            .expect("Cancellation is not observed");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_shortcuts_set_status() {
        let cases = [
            (StatusCodeResult::ok(request("/")), StatusCode::OK),
            (StatusCodeResult::bad_request(request("/")), StatusCode::BAD_REQUEST),
            (StatusCodeResult::unauthorized(request("/")), StatusCode::UNAUTHORIZED),
            (StatusCodeResult::not_found(request("/")), StatusCode::NOT_FOUND),
            (StatusCodeResult::conflict(request("/")), StatusCode::CONFLICT),
            (
                StatusCodeResult::internal_server_error(request("/")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (result, expected) in cases {
            assert_eq!(result.status_code(), expected);
        }
    }

    #[test]
    fn test_execute_future_is_ready() {
        let result = StatusCodeResult::ok(request("/"));
        let response = tokio_test::block_on(result.execute(CancellationToken::new()))
            .expect("Should execute");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
