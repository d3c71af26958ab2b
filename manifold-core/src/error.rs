//! Error types for Manifold.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ManifoldError`] - Top-level error type for all Manifold operations
//! - [`InvokeError`] - Errors raised by a single subscriber during fan-out

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Manifold operations.
#[derive(Error, Debug)]
pub enum ManifoldError {
    /// A callable was rejected at registration time.
    #[error("invalid callable: {0}")]
    InvalidCallable(&'static str),

    /// A subscriber failed while being invoked.
    #[error("invocation error: {0}")]
    Invoke(#[from] InvokeError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that a single subscriber can raise when invoked.
///
/// A registry returns the first one it encounters unmodified and skips the
/// remaining subscribers of that fan-out.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The object behind a bound method no longer exists.
    #[error("bound method target has been dropped")]
    TargetDropped,

    /// The wrapped callable reported a failure.
    #[error(transparent)]
    Failed(BoxError),
}

impl InvokeError {
    /// Wraps any error as a subscriber failure.
    pub fn failed(err: impl Into<BoxError>) -> Self {
        InvokeError::Failed(err.into())
    }
}

// Convenience conversions
impl From<BoxError> for ManifoldError {
    fn from(err: BoxError) -> Self {
        ManifoldError::Custom(err)
    }
}

impl From<BoxError> for InvokeError {
    fn from(err: BoxError) -> Self {
        InvokeError::Failed(err)
    }
}
