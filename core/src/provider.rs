//! Request providers: how a result obtains its originating request.
//!
//! - [`DirectProvider`]: the request was known when the result was built.
//! - [`DeferredProvider`]: the request is fetched from a [`RequestContext`]
//!   the first time it is needed, then memoized.
//!
//! [`RequestProvider`] is the sum of both and is what results store.

use crate::context::{RequestContext, SharedRequest};
use crate::error::{Result, ResultError};
use std::sync::{Arc, OnceLock, Weak};

/// Provider wrapping an already-known request.
#[derive(Debug, Clone)]
pub struct DirectProvider {
    request: SharedRequest,
}

impl DirectProvider {
    /// Wrap a known request.
    #[must_use]
    pub const fn new(request: SharedRequest) -> Self {
        Self { request }
    }

    /// Wrap a request that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::InvalidArgument`] if `request` is `None`.
    pub fn try_new(request: Option<SharedRequest>) -> Result<Self> {
        request
            .map(Self::new)
            .ok_or(ResultError::invalid_argument("request"))
    }

    /// The wrapped request. Never fails and has no side effects.
    #[must_use]
    pub fn request(&self) -> SharedRequest {
        Arc::clone(&self.request)
    }
}

/// Provider that looks the request up on a [`RequestContext`] on first use.
///
/// The context is held weakly: the provider never keeps it alive and never
/// mutates it. A successful lookup is cached for the life of the provider;
/// a failed lookup is not, so the next call asks the context again.
#[derive(Debug)]
pub struct DeferredProvider {
    context: Weak<dyn RequestContext>,
    resolved: OnceLock<DirectProvider>,
}

impl DeferredProvider {
    /// Bind to a context without querying it.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::InvalidArgument`] if `context` no longer points
    /// at a live context (including `Weak::new()`).
    pub fn new(context: Weak<dyn RequestContext>) -> Result<Self> {
        if context.strong_count() == 0 {
            return Err(ResultError::invalid_argument("context"));
        }

        Ok(Self {
            context,
            resolved: OnceLock::new(),
        })
    }

    /// Bind to a live context without querying it.
    #[must_use]
    pub fn from_context<C>(context: &Arc<C>) -> Self
    where
        C: RequestContext + 'static,
    {
        let context: Weak<C> = Arc::downgrade(context);
        Self {
            context,
            resolved: OnceLock::new(),
        }
    }

    /// Whether a request has been resolved and cached.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// The originating request, resolving it from the context if needed.
    ///
    /// Concurrent first calls may each query the context; only the first
    /// request stored wins, and every caller returns that one.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::InvalidState`] if the context has been released
    /// or has no current request. Nothing is cached in that case.
    pub fn request(&self) -> Result<SharedRequest> {
        if let Some(direct) = self.resolved.get() {
            tracing::trace!("Using cached request");
            return Ok(direct.request());
        }

        let context = self
            .context
            .upgrade()
            .ok_or(ResultError::CONTEXT_RELEASED)?;
        let request = context
            .current_request()
            .ok_or(ResultError::MISSING_REQUEST)?;

        let direct = self
            .resolved
            .get_or_init(|| DirectProvider::new(request));

        tracing::debug!(
            method = %direct.request.method,
            uri = %direct.request.uri,
            "Resolved request from context"
        );

        Ok(direct.request())
    }
}

/// How a result obtains its originating request.
#[derive(Debug)]
pub enum RequestProvider {
    /// Request supplied at construction.
    Direct(DirectProvider),
    /// Request fetched lazily from a context.
    Deferred(DeferredProvider),
}

impl RequestProvider {
    /// The originating request.
    ///
    /// # Errors
    ///
    /// Propagates [`DeferredProvider::request`] failures. The direct variant
    /// never fails.
    pub fn request(&self) -> Result<SharedRequest> {
        match self {
            Self::Direct(direct) => Ok(direct.request()),
            Self::Deferred(deferred) => deferred.request(),
        }
    }

    /// Whether the request is available without querying a context.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        match self {
            Self::Direct(_) => true,
            Self::Deferred(deferred) => deferred.is_resolved(),
        }
    }
}

impl From<DirectProvider> for RequestProvider {
    fn from(provider: DirectProvider) -> Self {
        Self::Direct(provider)
    }
}

impl From<DeferredProvider> for RequestProvider {
    fn from(provider: DeferredProvider) -> Self {
        Self::Deferred(provider)
    }
}
