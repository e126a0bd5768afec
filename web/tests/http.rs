//! End-to-end tests: action results executed by Axum handlers.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use action_results_core::{
    originating_request, HttpResponseFactory, RequestContext, StatusCodeResult,
};
use action_results_testing::init_tracing;
use action_results_web::{respond, status_result, AppError, RequestScope, WebResult};
use axum::{
    http::{HeaderValue, StatusCode},
    response::Response,
    routing::{delete, get},
    Router,
};
use axum_test::TestServer;
use tokio_util::sync::CancellationToken;

/// Echoes the originating request's path so tests can see which request the
/// response was linked to.
async fn remove(scope: RequestScope) -> WebResult<Response> {
    let result = status_result(StatusCode::NO_CONTENT, &scope);
    let mut response = respond(&result, CancellationToken::new()).await?;

    let path = originating_request(&response)
        .map(|request| request.uri.path().to_string())
        .unwrap_or_default();
    if let Ok(value) = HeaderValue::from_str(&path) {
        response.headers_mut().insert("x-originating-path", value);
    }
    Ok(response)
}

async fn before_routing() -> WebResult<Response> {
    let scope = RequestScope::empty();
    let result = status_result(StatusCode::OK, &scope);
    respond(&result, CancellationToken::new()).await
}

async fn direct(scope: RequestScope) -> WebResult<Response> {
    let request = scope
        .context()
        .current_request()
        .ok_or_else(|| AppError::internal("No request in scope"))?;
    let result = StatusCodeResult::not_found(request).with_factory(HttpResponseFactory::new());
    respond(&result, CancellationToken::new()).await
}

fn app() -> Router {
    Router::new()
        .route("/items/:id", delete(remove))
        .route("/early", get(before_routing))
        .route("/direct", get(direct))
}

#[tokio::test]
async fn deferred_result_uses_the_handled_request() {
    init_tracing();
    let server = TestServer::new(app()).unwrap();

    let response = server.delete("/items/42").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(response.header("x-originating-path"), "/items/42");
}

#[tokio::test]
async fn missing_request_becomes_server_error() {
    init_tracing();
    let server = TestServer::new(app()).unwrap();

    let response = server.get("/early").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "MISSING_REQUEST");
}

#[tokio::test]
async fn direct_result_keeps_its_status() {
    let server = TestServer::new(app()).unwrap();

    let response = server.get("/direct").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
