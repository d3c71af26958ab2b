//! Multicast registries.
//!
//! [`Delegate`] collects one result per subscriber; [`Action`] is the
//! void-signature form that discards them. Both share their structural
//! operations through the [`Multicast`] trait.
//!
//! # Locking
//!
//! Each registry owns one mutex. Structural operations and the whole
//! fan-out of `invoke` hold it, so invocations of one registry never
//! overlap. The mutex is not re-entrant: a subscriber that calls `add`,
//! `remove` or `invoke` on the registry currently invoking it deadlocks.
//! Independent registries share nothing.

mod action;
mod builder;
mod delegate;
mod ops;
mod subscribers;

pub use action::Action;
pub use builder::DelegateBuilder;
pub use delegate::Delegate;
pub use subscribers::SubscriberList;

use manifold_core::{Closure, Handle, Invocable};

/// Structural operations shared by [`Delegate`] and [`Action`].
///
/// Registries are move-only. There is no `Clone`; use
/// [`duplicate`](Multicast::duplicate) to build an independent copy that
/// shares the same subscribers.
pub trait Multicast<Args: 'static, R: 'static>: Sized {
    /// The underlying subscriber list.
    fn subscribers(&self) -> &SubscriberList<Args, R>;

    /// Wrap an existing subscriber list.
    fn from_subscribers(subscribers: SubscriberList<Args, R>) -> Self;

    /// Appends a handle. The same handle may be added more than once and is
    /// then invoked once per registration.
    fn add(&self, handle: Handle<Args, R>) -> &Self {
        self.subscribers().push(handle);
        self
    }

    /// Wraps `invocable`, adds it, and returns its handle for later removal.
    fn subscribe<I: Invocable<Args, R>>(&self, invocable: I) -> Handle<Args, R> {
        let handle = Handle::new(invocable);
        self.add(handle.clone());
        handle
    }

    /// Adds a closure and returns its handle.
    fn connect<F>(&self, func: F) -> Handle<Args, R>
    where
        Closure<F>: Invocable<Args, R>,
    {
        self.subscribe(Closure::new(func))
    }

    /// Removes the most recently added registration of `handle`.
    ///
    /// Returns `false`, leaving the registry untouched, when `handle` is not
    /// registered.
    fn remove(&self, handle: &Handle<Args, R>) -> bool {
        self.subscribers().remove_last(handle)
    }

    /// Appends every handle of `other`, in `other`'s order. `other` is not
    /// modified.
    fn compose<M: Multicast<Args, R>>(&self, other: &M) -> &Self {
        // Snapshot first so `other` may be `self`.
        let handles = other.subscribers().snapshot();
        self.subscribers().extend(handles);
        self
    }

    /// Removes every handle of `other`, one newest-first removal each, in
    /// `other`'s order. Handles that are not registered are skipped.
    fn decompose<M: Multicast<Args, R>>(&self, other: &M) -> &Self {
        let handles = other.subscribers().snapshot();
        self.subscribers().remove_each(&handles);
        self
    }

    /// Whether `handle` is registered.
    fn contains(&self, handle: &Handle<Args, R>) -> bool {
        self.subscribers().contains(handle)
    }

    /// A snapshot of the registered handles, in invocation order.
    fn handles(&self) -> Vec<Handle<Args, R>> {
        self.subscribers().snapshot()
    }

    /// Number of registrations.
    fn len(&self) -> usize {
        self.subscribers().len()
    }

    /// Whether nothing is registered.
    fn is_empty(&self) -> bool {
        self.subscribers().is_empty()
    }

    /// Removes every registration.
    fn clear(&self) {
        self.subscribers().clear();
    }

    /// Removes subscribers whose bound target has been dropped. Returns how
    /// many were removed.
    fn prune_expired(&self) -> usize {
        self.subscribers().retain_live()
    }

    /// Moves every registration into a new registry, leaving this one empty
    /// and reusable.
    fn take(&self) -> Self {
        let subscribers = self.subscribers();
        Self::from_subscribers(SubscriberList::from_handles(
            subscribers.name(),
            subscribers.take(),
        ))
    }

    /// Builds a new registry composed from this one.
    fn duplicate(&self) -> Self {
        let copy = Self::from_subscribers(SubscriberList::new(self.subscribers().name()));
        copy.compose(self);
        copy
    }
}
