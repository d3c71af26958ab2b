//! Invocable adapters.
//!
//! Wrappers that change how a single subscriber behaves before it is
//! registered:
//!
//! - [`MapOutput`] - transform the subscriber's result
//! - [`Catch`] - recover from the subscriber's errors so it can't abort a fan-out
//! - [`Traced`] - record every call with `tracing`
//!
//! All of them are reachable as methods through [`InvocableExt`].

mod catch;
mod map;
mod traced;

pub use catch::Catch;
pub use map::MapOutput;
pub use traced::Traced;

use manifold_core::{Handle, Invocable, InvokeError};

/// Combinators available on every [`Invocable`].
pub trait InvocableExt<Args: 'static, R: 'static>: Invocable<Args, R> + Sized {
    /// Wraps this subscriber in a shared [`Handle`].
    fn into_handle(self) -> Handle<Args, R> {
        Handle::new(self)
    }

    /// Transforms the result of every successful call.
    fn map_output<F, Out>(self, mapper: F) -> MapOutput<Self, F, R>
    where
        F: Fn(R) -> Out + Send + Sync + 'static,
    {
        MapOutput::new(self, mapper)
    }

    /// Turns every error into a value, isolating this subscriber.
    fn catch<F>(self, handler: F) -> Catch<Self, F>
    where
        F: Fn(InvokeError) -> R + Send + Sync + 'static,
    {
        Catch::new(self, handler)
    }

    /// Records every call with `tracing` under `name`.
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced::new(self, name)
    }
}

impl<Args: 'static, R: 'static, I: Invocable<Args, R>> InvocableExt<Args, R> for I {}
