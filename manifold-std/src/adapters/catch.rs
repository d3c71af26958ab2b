//! Catch adapter for per-subscriber failure isolation.

use manifold_core::{Invocable, InvokeError};

/// A subscriber whose errors are converted into results by `handler`.
///
/// A caught subscriber never aborts a fan-out.
pub struct Catch<I, F> {
    inner: I,
    handler: F,
}

impl<I, F> Catch<I, F> {
    /// Create a new catch adapter.
    pub fn new(inner: I, handler: F) -> Self {
        Self { inner, handler }
    }
}

impl<Args, R, I, F> Invocable<Args, R> for Catch<I, F>
where
    I: Invocable<Args, R>,
    F: Fn(InvokeError) -> R + Send + Sync + 'static,
{
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        match self.inner.invoke(args) {
            Ok(result) => Ok(result),
            Err(e) => Ok((self.handler)(e)),
        }
    }

    fn is_expired(&self) -> bool {
        self.inner.is_expired()
    }
}
