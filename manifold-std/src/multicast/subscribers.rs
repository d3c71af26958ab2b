//! The locked subscriber list shared by every registry type.

use manifold_core::{Handle, InvokeError};
use parking_lot::Mutex;

/// An ordered list of handles behind one mutex.
///
/// Insertion order is invocation order. Every operation takes the lock for
/// its whole duration; [`fan_out`](Self::fan_out) holds it while subscribers
/// run, so a subscriber must not call back into the list that is invoking
/// it. The mutex is not re-entrant and such a call deadlocks.
pub struct SubscriberList<Args, R> {
    name: &'static str,
    entries: Mutex<Vec<Handle<Args, R>>>,
}

impl<Args: 'static, R: 'static> SubscriberList<Args, R> {
    /// Create an empty list.
    pub fn new(name: &'static str) -> Self {
        Self::from_handles(name, Vec::new())
    }

    /// Create a list that already holds `handles`, in order.
    pub fn from_handles(name: &'static str, handles: Vec<Handle<Args, R>>) -> Self {
        Self {
            name,
            entries: Mutex::new(handles),
        }
    }

    /// The name used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append one handle.
    pub fn push(&self, handle: Handle<Args, R>) {
        let mut entries = self.entries.lock();
        entries.push(handle);
        trace!(delegate = self.name, len = entries.len(), "subscriber added");
    }

    /// Append `handles`, preserving their order.
    pub fn extend(&self, handles: Vec<Handle<Args, R>>) {
        let mut entries = self.entries.lock();
        entries.extend(handles);
        trace!(delegate = self.name, len = entries.len(), "subscribers composed");
    }

    /// Remove the most recently added handle identical to `handle`.
    ///
    /// Returns `false` when there is none.
    pub fn remove_last(&self, handle: &Handle<Args, R>) -> bool {
        let mut entries = self.entries.lock();
        let removed = remove_last_match(&mut entries, handle);
        trace!(delegate = self.name, removed, len = entries.len(), "subscriber removed");
        removed
    }

    /// Remove each of `handles` in turn, newest match first, skipping absent ones.
    ///
    /// Returns how many were removed.
    pub fn remove_each(&self, handles: &[Handle<Args, R>]) -> usize {
        let mut entries = self.entries.lock();
        let removed = handles
            .iter()
            .filter(|handle| remove_last_match(&mut entries, handle))
            .count();
        trace!(delegate = self.name, removed, len = entries.len(), "subscribers decomposed");
        removed
    }

    /// Whether `handle` is registered at least once.
    pub fn contains(&self, handle: &Handle<Args, R>) -> bool {
        self.entries.lock().contains(handle)
    }

    /// A copy of the current handles, in order.
    pub fn snapshot(&self) -> Vec<Handle<Args, R>> {
        self.entries.lock().clone()
    }

    /// Move every handle out, leaving the list empty.
    pub fn take(&self) -> Vec<Handle<Args, R>> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Drop every handle.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Drop handles whose subscriber has expired. Returns how many were dropped.
    pub fn retain_live(&self) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|handle| !handle.is_expired());
        let pruned = before - entries.len();
        if pruned > 0 {
            debug!(delegate = self.name, pruned, "expired subscribers pruned");
        }
        pruned
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether there are no registrations.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.lock().capacity()
    }
}

impl<Args: Clone + 'static, R: 'static> SubscriberList<Args, R> {
    /// Invoke every handle in order, passing each result to `sink`.
    ///
    /// Stops at the first failing subscriber and returns its error; the
    /// subscribers after it are not called for this invocation.
    pub fn fan_out(&self, args: Args, mut sink: impl FnMut(R)) -> Result<(), InvokeError> {
        let entries = self.entries.lock();

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "fan_out",
            delegate = self.name,
            subscribers = entries.len()
        )
        .entered();

        let Some((last, rest)) = entries.split_last() else {
            return Ok(());
        };
        for (index, handle) in rest.iter().enumerate() {
            sink(checked(self.name, index, handle.invoke(args.clone()))?);
        }
        sink(checked(self.name, rest.len(), last.invoke(args))?);
        Ok(())
    }
}

impl<Args: 'static, R: 'static> std::fmt::Debug for SubscriberList<Args, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberList")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}

fn remove_last_match<Args: 'static, R: 'static>(entries: &mut Vec<Handle<Args, R>>, handle: &Handle<Args, R>) -> bool {
    match entries.iter().rposition(|entry| entry == handle) {
        Some(pos) => {
            entries.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn checked<R>(
    name: &'static str,
    index: usize,
    result: Result<R, InvokeError>,
) -> Result<R, InvokeError> {
    if let Err(err) = &result {
        debug!(delegate = name, index, error = %err, "subscriber failed, aborting fan-out");
    }
    result
}
