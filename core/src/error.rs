//! Error types for building and executing action results.

use thiserror::Error;

/// Result type alias for action result operations.
pub type Result<T> = std::result::Result<T, ResultError>;

/// Failures raised while constructing or executing an action result.
///
/// All variants are raised synchronously by the operation that detects them
/// and are never retried internally. They describe usage bugs in the
/// surrounding pipeline, not transient faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResultError {
    /// A required dependency was missing at construction time.
    #[error("Invalid argument: `{name}` must be provided")]
    InvalidArgument {
        /// Name of the missing dependency
        name: &'static str,
    },

    /// The request context could not supply a request when one was needed.
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// What the context failed to provide
        reason: &'static str,
    },

    /// The response factory failed while populating a response.
    #[error("Response construction failed: {0}")]
    ResponseConstruction(String),
}

impl ResultError {
    /// The context had no current request.
    pub const MISSING_REQUEST: Self = Self::InvalidState {
        reason: "the context must supply a request before this operation can complete",
    };

    /// The context was released before the request was resolved.
    pub const CONTEXT_RELEASED: Self = Self::InvalidState {
        reason: "the context was released before a request could be resolved",
    };

    /// Create a [`ResultError::InvalidArgument`] for the named dependency.
    #[must_use]
    pub const fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    /// Whether this error is an [`ResultError::InvalidState`].
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
