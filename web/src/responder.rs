//! Executing action results inside Axum handlers.

use crate::error::AppError;
use crate::extractors::RequestScope;
use action_results_core::{ActionResult, HttpResponseFactory, StatusCodeResult};
use axum::{body::Body, http::StatusCode, response::Response};
use tokio_util::sync::CancellationToken;

/// Status code result producing Axum responses.
pub type WebStatusResult = StatusCodeResult<HttpResponseFactory<Body>>;

/// Build a result that responds with `status` to the request held by `scope`.
///
/// The scope's context is not queried until the result is executed.
#[must_use]
pub fn status_result(status: StatusCode, scope: &RequestScope) -> WebStatusResult {
    StatusCodeResult::for_context(status, scope.context()).with_factory(HttpResponseFactory::new())
}

/// Execute `result` and translate its failures into [`AppError`].
///
/// Failures are logged once, when the [`AppError`] is rendered.
///
/// # Errors
///
/// Returns an [`AppError`] with status 500 if the result cannot produce a
/// response.
pub async fn respond<R>(result: &R, cancellation: CancellationToken) -> Result<Response, AppError>
where
    R: ActionResult<Response = Response>,
{
    result.execute(cancellation).await.map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use action_results_core::{originating_request, RequestContext};
    use axum::http::Request;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_respond_with_scope_request() {
        let scope = RequestScope::empty();
        let (parts, ()) = Request::put("/items/3")
            .body(())
            .expect("Valid request")
            .into_parts();
        scope.context().set_request(Arc::new(parts));

        let result = status_result(StatusCode::ACCEPTED, &scope);
        let response = respond(&result, CancellationToken::new())
            .await
            .expect("Should respond");

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let current = scope.context().current_request().expect("Request set");
        let attached = originating_request(&response).expect("Request attached");
        assert!(Arc::ptr_eq(attached, &current));
    }

    #[tokio::test]
    async fn test_respond_without_request_is_app_error() {
        let scope = RequestScope::empty();
        let result = status_result(StatusCode::OK, &scope);

        let err = respond(&result, CancellationToken::new())
            .await
            .expect_err("No request in scope");

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "MISSING_REQUEST");
    }

    #[tokio::test]
    async fn test_respond_after_scope_dropped() {
        let scope = RequestScope::empty();
        let result = status_result(StatusCode::OK, &scope);
        drop(scope);

        let err = respond(&result, CancellationToken::new())
            .await
            .expect_err("Context was released");

        assert_eq!(err.code(), "CONTEXT_RELEASED");
    }
}
