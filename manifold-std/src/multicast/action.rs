//! Action: the void-signature registry.

use super::{DelegateBuilder, Multicast, SubscriberList};
use manifold_core::{Closure, Handle, Invocable, InvokeError, Signature};
use std::{fmt, sync::Arc};

/// A multicast collection of subscribers that return nothing.
///
/// Unlike `Delegate<Args, ()>`, invoking an `Action` does not allocate a
/// result vector; each subscriber runs for its side effects only.
///
/// # Example
///
/// ```rust,ignore
/// let on_resize = Action::<(u16, u16)>::named("on_resize");
/// on_resize.connect(|w: u16, h: u16| println!("{w}x{h}"));
/// on_resize.invoke((80, 24))?;
/// ```
pub struct Action<Args = ()> {
    subscribers: SubscriberList<Args, ()>,
}

impl<Args: 'static> Action<Args> {
    /// Create an empty action.
    pub fn new() -> Self {
        Self::named("action")
    }

    /// Create an empty action with a name for log output.
    pub fn named(name: &'static str) -> Self {
        Self {
            subscribers: SubscriberList::new(name),
        }
    }

    /// Start building an action; finish with
    /// [`build_action`](DelegateBuilder::build_action).
    pub fn builder() -> DelegateBuilder<Args, ()> {
        DelegateBuilder::new()
    }

    /// Create an action holding exactly `handle`.
    pub fn from_handle(handle: Handle<Args, ()>) -> Self {
        let action = Self::new();
        action.add(handle);
        action
    }

    /// Create an action holding one plain function.
    pub fn from_fn(function: Args::FnPtr) -> Self
    where
        Args: Signature<()>,
    {
        Self::from_handle(Handle::<Args, ()>::from_fn(function))
    }

    /// Create an action holding one method bound to a non-owned receiver.
    pub fn from_method<T>(target: &Arc<T>, method: Args::MethodPtr<T>) -> Self
    where
        Args: Signature<()>,
        T: Send + Sync + 'static,
    {
        Self::from_handle(Handle::<Args, ()>::from_method(target, method))
    }

    /// Create an action holding one closure.
    pub fn from_closure<F>(func: F) -> Self
    where
        Closure<F>: Invocable<Args, ()>,
    {
        Self::from_handle(Handle::<Args, ()>::from_closure(func))
    }
}

impl<Args: Clone + 'static> Action<Args> {
    /// Invoke every subscriber in order.
    ///
    /// A no-op when nothing is registered. The first failing subscriber
    /// aborts the fan-out and its error is returned as is.
    pub fn invoke(&self, args: Args) -> Result<(), InvokeError> {
        self.subscribers.fan_out(args, |()| {})
    }
}

impl<Args: 'static> Multicast<Args, ()> for Action<Args> {
    fn subscribers(&self) -> &SubscriberList<Args, ()> {
        &self.subscribers
    }

    fn from_subscribers(subscribers: SubscriberList<Args, ()>) -> Self {
        Self { subscribers }
    }
}

impl<Args: 'static> Default for Action<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> fmt::Debug for Action<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.subscribers.name())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_invoke_runs_side_effects_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let action = Action::<(&'static str,)>::new();

        let l = log.clone();
        action.connect(move |s: &'static str| l.lock().push(format!("first:{s}")));
        let l = log.clone();
        action.connect(move |s: &'static str| l.lock().push(format!("second:{s}")));

        action.invoke(("a",)).unwrap();
        action.invoke(("b",)).unwrap();
        assert_eq!(
            *log.lock(),
            vec!["first:a", "second:a", "first:b", "second:b"]
        );
    }

    #[test]
    fn test_empty_action_is_noop() {
        let action = Action::<()>::new();
        action.invoke(()).unwrap();
        assert!(action.is_empty());
    }

    #[test]
    fn test_from_method_on_void_signature() {
        struct Bell(Mutex<u32>);
        impl Bell {
            fn ring(&self) {
                *self.0.lock() += 1;
            }
        }

        let bell = Arc::new(Bell(Mutex::new(0)));
        let action = Action::<()>::from_method(&bell, Bell::ring);
        action.invoke(()).unwrap();
        action.invoke(()).unwrap();
        assert_eq!(*bell.0.lock(), 2);

        drop(bell);
        assert_eq!(action.prune_expired(), 1);
        assert!(action.is_empty());
    }
}
