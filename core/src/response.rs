//! Response construction.
//!
//! A response is built in two steps: [`ResponseFactory::allocate`] creates it
//! with a status code, then [`ResponseFactory::attach_request`] links it to
//! the originating request. The caller owns the allocated value, so if any
//! step after allocation fails the half-built response is dropped on that
//! exit path and never escapes.

use crate::context::SharedRequest;
use crate::error::Result;
use http::{Response, StatusCode};
use std::fmt;
use std::marker::PhantomData;

/// Builds the responses produced by executing a result.
pub trait ResponseFactory: Send + Sync {
    /// The response type produced.
    type Response: Send;

    /// Allocate a response carrying `status`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResultError::ResponseConstruction`] if the response
    /// cannot be created.
    fn allocate(&self, status: StatusCode) -> Result<Self::Response>;

    /// Link `response` to the request that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResultError::ResponseConstruction`] if the request
    /// cannot be attached. The caller drops `response` in that case.
    fn attach_request(&self, response: &mut Self::Response, request: SharedRequest) -> Result<()>;
}

/// Response extension holding the request a response was produced for.
#[derive(Debug, Clone)]
pub struct OriginatingRequest(pub SharedRequest);

/// Factory producing [`http::Response`] values with an empty body.
///
/// The originating request is stored in the response extensions as an
/// [`OriginatingRequest`].
pub struct HttpResponseFactory<B = ()> {
    _body: PhantomData<fn() -> B>,
}

impl<B> HttpResponseFactory<B> {
    /// Create a factory.
    #[must_use]
    pub const fn new() -> Self {
        Self { _body: PhantomData }
    }
}

impl<B> Default for HttpResponseFactory<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Clone for HttpResponseFactory<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for HttpResponseFactory<B> {}

impl<B> fmt::Debug for HttpResponseFactory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponseFactory")
            .field("body", &std::any::type_name::<B>())
            .finish()
    }
}

impl<B> ResponseFactory for HttpResponseFactory<B>
where
    B: Default + Send,
{
    type Response = Response<B>;

    fn allocate(&self, status: StatusCode) -> Result<Self::Response> {
        let mut response = Response::new(B::default());
        *response.status_mut() = status;
        Ok(response)
    }

    fn attach_request(&self, response: &mut Self::Response, request: SharedRequest) -> Result<()> {
        response.extensions_mut().insert(OriginatingRequest(request));
        Ok(())
    }
}

/// The originating request stored on a response built by [`HttpResponseFactory`].
#[must_use]
pub fn originating_request<B>(response: &Response<B>) -> Option<&SharedRequest> {
    response
        .extensions()
        .get::<OriginatingRequest>()
        .map(|originating| &originating.0)
}
