//! Request contexts: where a deferred result fetches its request from.
//!
//! A [`RequestContext`] is anything that can answer "what request is being
//! processed right now?". The framework usually owns the context and only
//! populates it once routing has produced a request, so results hold it
//! weakly and ask late.

use http::request::Parts;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the head of an HTTP request.
///
/// Results never dispose of or mutate the request they are given; they only
/// keep a reference and hand it on to the response.
pub type SharedRequest = Arc<Parts>;

/// Source of the request currently being processed.
///
/// # Example
///
/// ```
/// use action_results_core::{RequestContext, SharedRequest};
///
/// struct Fixed(SharedRequest);
///
/// impl RequestContext for Fixed {
///     fn current_request(&self) -> Option<SharedRequest> {
///         Some(self.0.clone())
///     }
/// }
/// ```
pub trait RequestContext: Send + Sync {
    /// The current request, or `None` if the context cannot supply one yet.
    fn current_request(&self) -> Option<SharedRequest>;
}

/// Controller-like context whose current request is set by the framework.
///
/// Starts empty unless built with [`ControllerContext::with_request`].
#[derive(Debug, Default)]
pub struct ControllerContext {
    request: RwLock<Option<SharedRequest>>,
}

impl ControllerContext {
    /// Create a context with no current request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that already holds `request`.
    #[must_use]
    pub fn with_request(request: SharedRequest) -> Self {
        Self {
            request: RwLock::new(Some(request)),
        }
    }

    /// Replace the current request.
    pub fn set_request(&self, request: SharedRequest) {
        *self
            .request
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(request);
    }

    /// Forget the current request.
    pub fn clear_request(&self) {
        *self
            .request
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl RequestContext for ControllerContext {
    fn current_request(&self) -> Option<SharedRequest> {
        self.request
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
