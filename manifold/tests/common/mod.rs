#![allow(dead_code)]

use manifold::{Delegate, Handle, Multicast};
use parking_lot::Mutex;
use std::sync::Arc;

// ============================================================================
// Test Subscribers
// ============================================================================

pub fn constant(value: i32) -> Handle<(), i32> {
    Handle::from_closure(move || value)
}

pub fn constants(values: &[i32]) -> Vec<Handle<(), i32>> {
    values.iter().copied().map(constant).collect()
}

pub fn registry_of(handles: &[Handle<(), i32>]) -> Delegate<(), i32> {
    let delegate = Delegate::new();
    for handle in handles {
        delegate.add(handle.clone());
    }
    delegate
}

/// A void subscriber appending `id` to `log` each time it runs.
pub fn log_id(log: &Arc<Mutex<Vec<usize>>>, id: usize) -> Handle<(), ()> {
    let log = log.clone();
    Handle::from_closure(move || log.lock().push(id))
}

// ============================================================================
// Bound Method Targets
// ============================================================================

pub struct Counter {
    pub hits: Mutex<u32>,
    pub step: u32,
}

impl Counter {
    pub fn new(step: u32) -> Arc<Self> {
        Arc::new(Self {
            hits: Mutex::new(0),
            step,
        })
    }

    pub fn bump(&self) -> u32 {
        let mut hits = self.hits.lock();
        *hits += self.step;
        *hits
    }

    pub fn bump_by(&self, extra: u32) -> u32 {
        let mut hits = self.hits.lock();
        *hits += self.step + extra;
        *hits
    }
}
