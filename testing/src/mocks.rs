//! Mock request contexts and response factories.

use action_results_core::{RequestContext, ResponseFactory, ResultError, SharedRequest};
use http::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Request context that records how many times it was queried.
#[derive(Debug, Default)]
pub struct CountingContext {
    request: RwLock<Option<SharedRequest>>,
    queries: AtomicUsize,
}

impl CountingContext {
    /// Create a context with no current request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current request.
    pub fn set_request(&self, request: SharedRequest) {
        *self
            .request
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(request);
    }

    /// Number of `current_request` calls so far.
    #[must_use]
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl RequestContext for CountingContext {
    fn current_request(&self) -> Option<SharedRequest> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.request
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Response whose lifetime is tracked by a [`TrackingFactory`].
#[derive(Debug)]
pub struct TrackedResponse {
    /// Status the response was allocated with.
    pub status: StatusCode,
    /// Attached request, if attachment succeeded.
    pub request: Option<SharedRequest>,
    live: Arc<AtomicUsize>,
}

impl Drop for TrackedResponse {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Response factory that counts live responses and can fail on attach.
///
/// # Example
///
/// ```
/// use action_results_testing::mocks::TrackingFactory;
///
/// let factory = TrackingFactory::failing_attach();
/// assert_eq!(factory.live(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrackingFactory {
    live: Arc<AtomicUsize>,
    allocated: Arc<AtomicUsize>,
    fail_attach: bool,
}

impl TrackingFactory {
    /// Factory that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that fails after allocation, while attaching the request.
    #[must_use]
    pub fn failing_attach() -> Self {
        Self {
            fail_attach: true,
            ..Self::default()
        }
    }

    /// Responses allocated and not yet dropped.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Responses allocated in total.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.allocated.load(Ordering::SeqCst)
    }
}

impl ResponseFactory for TrackingFactory {
    type Response = TrackedResponse;

    fn allocate(&self, status: StatusCode) -> Result<TrackedResponse, ResultError> {
        self.allocated.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(TrackedResponse {
            status,
            request: None,
            live: Arc::clone(&self.live),
        })
    }

    fn attach_request(
        &self,
        response: &mut TrackedResponse,
        request: SharedRequest,
    ) -> Result<(), ResultError> {
        if self.fail_attach {
            return Err(ResultError::ResponseConstruction(
                "simulated attach fault".to_string(),
            ));
        }
        response.request = Some(request);
        Ok(())
    }
}
