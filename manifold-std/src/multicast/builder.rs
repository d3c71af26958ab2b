//! Builder for constructing registries.

use super::{Action, Delegate, Multicast, SubscriberList};
use manifold_core::{Handle, Invocable};

/// Builder for constructing a [`Delegate`] or [`Action`].
///
/// # Example
/// ```ignore
/// let on_save = Delegate::<(String,), bool>::builder()
///     .name("on_save")
///     .capacity(8)
///     .add(validate)
///     .add(persist)
///     .build();
/// ```
pub struct DelegateBuilder<Args, R = ()> {
    name: Option<&'static str>,
    capacity: usize,
    handles: Vec<Handle<Args, R>>,
}

impl<Args: 'static, R: 'static> DelegateBuilder<Args, R> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            name: None,
            capacity: 0,
            handles: Vec::new(),
        }
    }

    /// Set the name used in log output.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Reserve room for at least `capacity` subscribers.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Register a handle.
    pub fn add(mut self, handle: Handle<Args, R>) -> Self {
        self.handles.push(handle);
        self
    }

    /// Register an invocable.
    pub fn subscribe<I: Invocable<Args, R>>(self, invocable: I) -> Self {
        self.add(Handle::new(invocable))
    }

    /// Get the number of registered subscribers.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if the builder has no subscribers.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Build the delegate.
    pub fn build(self) -> Delegate<Args, R> {
        Delegate::from_subscribers(self.into_list("delegate"))
    }

    fn into_list(mut self, default_name: &'static str) -> SubscriberList<Args, R> {
        let extra = self.capacity.saturating_sub(self.handles.len());
        self.handles.reserve(extra);
        SubscriberList::from_handles(self.name.unwrap_or(default_name), self.handles)
    }
}

impl<Args: 'static> DelegateBuilder<Args, ()> {
    /// Build a void-signature action.
    pub fn build_action(self) -> Action<Args> {
        Action::from_subscribers(self.into_list("action"))
    }
}

impl<Args: 'static, R: 'static> Default for DelegateBuilder<Args, R> {
    fn default() -> Self {
        Self::new()
    }
}
