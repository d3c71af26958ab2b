//! Delegate: a multicast registry that collects every subscriber's result.

use super::{DelegateBuilder, Multicast, SubscriberList};
use manifold_core::{Closure, Handle, Invocable, InvokeError, Signature};
use std::{fmt, sync::Arc};

/// An ordered, thread-safe multicast collection of subscribers sharing the
/// signature `Args -> R`.
///
/// `invoke` calls every subscriber in registration order and returns their
/// results in the same order.
///
/// # Example
///
/// ```rust,ignore
/// use manifold::prelude::*;
///
/// let scores = Delegate::<(u32,), u32>::new();
/// let double = scores.connect(|x: u32| x * 2);
/// scores.connect(|x: u32| x + 1);
///
/// assert_eq!(scores.invoke((10,))?, vec![20, 11]);
///
/// scores.remove(&double);
/// assert_eq!(scores.invoke((10,))?, vec![11]);
/// ```
pub struct Delegate<Args, R = ()> {
    subscribers: SubscriberList<Args, R>,
}

impl<Args: 'static, R: 'static> Delegate<Args, R> {
    /// Create an empty delegate.
    pub fn new() -> Self {
        Self::named("delegate")
    }

    /// Create an empty delegate with a name for log output.
    pub fn named(name: &'static str) -> Self {
        Self {
            subscribers: SubscriberList::new(name),
        }
    }

    /// Start building a delegate.
    pub fn builder() -> DelegateBuilder<Args, R> {
        DelegateBuilder::new()
    }

    /// Create a delegate holding exactly `handle`.
    pub fn from_handle(handle: Handle<Args, R>) -> Self {
        let delegate = Self::new();
        delegate.add(handle);
        delegate
    }

    /// Create a delegate holding one plain function.
    pub fn from_fn(function: Args::FnPtr) -> Self
    where
        Args: Signature<R>,
    {
        Self::from_handle(Handle::<Args, R>::from_fn(function))
    }

    /// Create a delegate holding one method bound to a non-owned receiver.
    pub fn from_method<T>(target: &Arc<T>, method: Args::MethodPtr<T>) -> Self
    where
        Args: Signature<R>,
        T: Send + Sync + 'static,
    {
        Self::from_handle(Handle::<Args, R>::from_method(target, method))
    }

    /// Create a delegate holding one closure.
    pub fn from_closure<F>(func: F) -> Self
    where
        Closure<F>: Invocable<Args, R>,
    {
        Self::from_handle(Handle::<Args, R>::from_closure(func))
    }
}

impl<Args: Clone + 'static, R: 'static> Delegate<Args, R> {
    /// Invoke every subscriber in order and collect their results.
    ///
    /// An empty delegate returns an empty vector. The first failing
    /// subscriber aborts the fan-out and its error is returned as is;
    /// subscribers that already ran keep their effects.
    pub fn invoke(&self, args: Args) -> Result<Vec<R>, InvokeError> {
        let mut results = Vec::new();
        self.subscribers.fan_out(args, |r| results.push(r))?;
        Ok(results)
    }

    /// Invoke every subscriber in order and keep only the last result.
    ///
    /// Returns `None` when nothing is registered.
    pub fn invoke_last(&self, args: Args) -> Result<Option<R>, InvokeError> {
        let mut last = None;
        self.subscribers.fan_out(args, |r| last = Some(r))?;
        Ok(last)
    }
}

impl<Args: 'static, R: 'static> Multicast<Args, R> for Delegate<Args, R> {
    fn subscribers(&self) -> &SubscriberList<Args, R> {
        &self.subscribers
    }

    fn from_subscribers(subscribers: SubscriberList<Args, R>) -> Self {
        Self { subscribers }
    }
}

impl<Args: 'static, R: 'static> Default for Delegate<Args, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static, R: 'static> fmt::Debug for Delegate<Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("name", &self.subscribers.name())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
