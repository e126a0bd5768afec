//! # Action Results Core
//!
//! Status code action results for HTTP request handling.
//!
//! A [`StatusCodeResult`] pairs a status code with a way to obtain the
//! request that produced the action. Executing it yields a response carrying
//! that status and linked to that request.
//!
//! ## Request acquisition
//!
//! - **Direct**: the caller already holds the request.
//! - **Deferred**: the caller holds a [`RequestContext`] (typically a
//!   [`ControllerContext`]) that will only know the request later. The
//!   lookup happens on first use, failures are not cached, and the first
//!   successful lookup is frozen.
//!
//! ## Response construction
//!
//! Responses are built by a [`ResponseFactory`]. Execution allocates the
//! response, resolves the request and attaches it; a failure at any step
//! drops the partially built response before the error is returned.
//!
//! ## Example
//!
//! ```
//! use action_results_core::{ActionResult, ControllerContext, StatusCodeResult};
//! use http::{Request, StatusCode};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let context = Arc::new(ControllerContext::new());
//! let result = StatusCodeResult::for_context(StatusCode::NO_CONTENT, &context);
//!
//! // Routing later hands the request to the context.
//! let (parts, ()) = Request::delete("/orders/7").body(())?.into_parts();
//! context.set_request(Arc::new(parts));
//!
//! let response = futures::executor::block_on(result.execute(CancellationToken::new()))?;
//! assert_eq!(response.status(), StatusCode::NO_CONTENT);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod error;
pub mod provider;
pub mod response;
pub mod result;

pub use context::{ControllerContext, RequestContext, SharedRequest};
pub use error::{Result, ResultError};
pub use provider::{DeferredProvider, DirectProvider, RequestProvider};
pub use response::{HttpResponseFactory, OriginatingRequest, ResponseFactory, originating_request};
pub use result::{ActionResult, StatusCodeResult};
