//! Map adapter for result transformation.

use manifold_core::{Invocable, InvokeError};
use std::marker::PhantomData;

/// A subscriber whose result is passed through `mapper`.
pub struct MapOutput<I, F, In> {
    inner: I,
    mapper: F,
    _phantom: PhantomData<fn() -> In>,
}

impl<I, F, In> MapOutput<I, F, In> {
    /// Create a new map adapter.
    pub fn new(inner: I, mapper: F) -> Self {
        Self {
            inner,
            mapper,
            _phantom: PhantomData,
        }
    }
}

impl<Args, In, Out, I, F> Invocable<Args, Out> for MapOutput<I, F, In>
where
    In: 'static,
    I: Invocable<Args, In>,
    F: Fn(In) -> Out + Send + Sync + 'static,
{
    fn invoke(&self, args: Args) -> Result<Out, InvokeError> {
        self.inner.invoke(args).map(&self.mapper)
    }

    fn is_expired(&self) -> bool {
        self.inner.is_expired()
    }
}
