//! Traced adapter - observability for a single subscriber.

use manifold_core::{Invocable, InvokeError};

/// A subscriber wrapper that instruments every call with a `tracing` span.
///
/// Without the `tracing` feature it forwards calls unchanged.
pub struct Traced<I> {
    inner: I,
    name: &'static str,
}

impl<I> Traced<I> {
    /// Create a new `Traced` wrapper around a subscriber.
    pub const fn new(inner: I, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name recorded on every span.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<I: Clone> Clone for Traced<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<Args, R, I> Invocable<Args, R> for Traced<I>
where
    I: Invocable<Args, R>,
{
    #[cfg(feature = "tracing")]
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        let _span = tracing::debug_span!("invoke", subscriber = %self.name).entered();
        let result = self.inner.invoke(args);
        match &result {
            Ok(_) => tracing::trace!("subscriber returned"),
            Err(err) => tracing::debug!(error = %err, "subscriber failed"),
        }
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        self.inner.invoke(args)
    }

    fn is_expired(&self) -> bool {
        self.inner.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InvocableExt;
    use manifold_core::{Closure, TryClosure};

    #[test]
    fn test_traced_passthrough() {
        let traced = Closure::new(|a: i32, b: i32| a * b).traced("product");
        assert_eq!(traced.name(), "product");
        assert_eq!(traced.invoke((6, 7)).unwrap(), 42);
    }

    #[test]
    fn test_traced_keeps_error() {
        let traced = TryClosure::new(|| Err::<(), _>("offline")).traced("sync");
        let err = Invocable::<(), ()>::invoke(&traced, ()).unwrap_err();
        assert_eq!(err.to_string(), "offline");
    }
}
