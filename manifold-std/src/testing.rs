//! Testing utilities for Manifold.
//!
//! This module provides subscribers that make testing delegates and actions easier.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log that hands out [`Tagged`] subscribers
//! - [`SpySubscriber`]: A subscriber that records its arguments and can be controlled
//! - [`CountingSubscriber`]: A subscriber that counts invocations
//! - [`FailingSubscriber`]: A subscriber that always fails

use manifold_core::{Invocable, InvokeError};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// A shared log recording which subscribers ran, in the order they ran.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let action = Action::<(u8,)>::new();
/// action.subscribe(log.tagged("first"));
/// action.subscribe(log.tagged("second"));
///
/// action.invoke((1,))?;
/// assert_eq!(log.entries(), vec!["first", "second"]);
/// ```
pub struct CallLog<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> CallLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A subscriber that appends `tag` each time it is invoked.
    pub fn tagged(&self, tag: T) -> Tagged<T> {
        Tagged {
            tag,
            entries: self.entries.clone(),
        }
    }

    /// Append an entry directly.
    pub fn record(&self, entry: T) {
        self.entries.lock().push(entry);
    }

    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<T> {
        self.entries.lock().clone()
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl<T: Clone> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// A subscriber handed out by [`CallLog::tagged`].
///
/// It ignores its arguments, so one tagged subscriber fits any signature
/// returning `()`.
pub struct Tagged<T> {
    tag: T,
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> Tagged<T> {
    /// The tag this subscriber records.
    pub fn tag(&self) -> &T {
        &self.tag
    }
}

impl<Args: 'static, T: Clone + Send + Sync + 'static> Invocable<Args, ()> for Tagged<T> {
    fn invoke(&self, _args: Args) -> Result<(), InvokeError> {
        self.entries.lock().push(self.tag.clone());
        Ok(())
    }
}

// ============================================================================
// Spy Subscriber
// ============================================================================

/// A subscriber that records its arguments and returns a programmable result.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpySubscriber::<(u32,), u32>::returning(7);
/// let delegate = Delegate::from_handle(spy.clone().into_handle());
///
/// assert_eq!(delegate.invoke((1,))?, vec![7]);
/// assert_eq!(spy.inputs(), vec![(1,)]);
/// ```
pub struct SpySubscriber<Args, R> {
    inputs: Arc<Mutex<Vec<Args>>>,
    output: Arc<Mutex<R>>,
    should_error: Arc<Mutex<Option<String>>>,
}

impl<Args: Clone, R: Clone> SpySubscriber<Args, R> {
    /// Create a spy that returns `output`.
    pub fn returning(output: R) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            output: Arc::new(Mutex::new(output)),
            should_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the output to return.
    pub fn set_output(&self, output: R) {
        *self.output.lock() = output;
    }

    /// Set an error to return.
    pub fn set_error(&self, error: impl Into<String>) {
        *self.should_error.lock() = Some(error.into());
    }

    /// Clear error state.
    pub fn clear_error(&self) {
        *self.should_error.lock() = None;
    }

    /// Get recorded inputs.
    pub fn inputs(&self) -> Vec<Args> {
        self.inputs.lock().clone()
    }

    /// Get the number of times the spy was invoked.
    pub fn call_count(&self) -> usize {
        self.inputs.lock().len()
    }
}

impl<Args: Clone, R: Clone + Default> Default for SpySubscriber<Args, R> {
    fn default() -> Self {
        Self::returning(R::default())
    }
}

impl<Args, R> Clone for SpySubscriber<Args, R> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            should_error: self.should_error.clone(),
        }
    }
}

impl<Args, R> Invocable<Args, R> for SpySubscriber<Args, R>
where
    Args: Clone + Send + 'static,
    R: Clone + Send + 'static,
{
    fn invoke(&self, args: Args) -> Result<R, InvokeError> {
        self.inputs.lock().push(args);

        if let Some(ref err) = *self.should_error.lock() {
            return Err(InvokeError::failed(err.clone()));
        }

        Ok(self.output.lock().clone())
    }
}

// ============================================================================
// Counting Subscriber
// ============================================================================

/// A subscriber that counts invocations.
///
/// Clones share the same counter.
pub struct CountingSubscriber {
    count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    /// Create a new counting subscriber.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingSubscriber {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<Args: 'static> Invocable<Args, ()> for CountingSubscriber {
    fn invoke(&self, _args: Args) -> Result<(), InvokeError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Subscriber
// ============================================================================

/// A subscriber that fails every time with the same message.
#[derive(Clone, Debug)]
pub struct FailingSubscriber {
    message: &'static str,
}

impl FailingSubscriber {
    /// Create a subscriber failing with `message`.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl<Args: 'static, R: 'static> Invocable<Args, R> for FailingSubscriber {
    fn invoke(&self, _args: Args) -> Result<R, InvokeError> {
        Err(InvokeError::failed(self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_log_records_tags_in_order() {
        let log = CallLog::new();
        let a = log.tagged("a");
        let b = log.tagged("b");

        Invocable::<(), ()>::invoke(&a, ()).unwrap();
        Invocable::<(u8,), ()>::invoke(&b, (1,)).unwrap();
        Invocable::<(), ()>::invoke(&a, ()).unwrap();

        assert_eq!(log.entries(), vec!["a", "b", "a"]);
        assert_eq!(*b.tag(), "b");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_spy_records_and_errors() {
        let spy = SpySubscriber::<(i32,), i32>::returning(5);
        assert_eq!(spy.invoke((1,)).unwrap(), 5);

        spy.set_output(6);
        spy.set_error("boom");
        assert_eq!(spy.invoke((2,)).unwrap_err().to_string(), "boom");

        spy.clear_error();
        assert_eq!(spy.invoke((3,)).unwrap(), 6);
        assert_eq!(spy.inputs(), vec![(1,), (2,), (3,)]);
        assert_eq!(spy.call_count(), 3);
    }

    #[test]
    fn test_counting_shares_count_across_clones() {
        let counter = CountingSubscriber::new();
        let clone = counter.clone();
        Invocable::<(), ()>::invoke(&clone, ()).unwrap();
        Invocable::<(&str,), ()>::invoke(&clone, ("x",)).unwrap();
        assert_eq!(counter.count(), 2);

        counter.reset();
        assert_eq!(clone.count(), 0);
    }

    #[test]
    fn test_failing_always_fails() {
        let failing = FailingSubscriber::new("down");
        let err = Invocable::<(), u8>::invoke(&failing, ()).unwrap_err();
        assert!(matches!(err, InvokeError::Failed(_)));
        assert_eq!(err.to_string(), "down");
    }
}
