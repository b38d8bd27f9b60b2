//! Ordered expectation queue

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use understudy_domain::Expectation;

/// Shared, ordered queue of declared expectations.
///
/// Cloning yields another handle to the same queue, which is how the
/// harness and its transports stay in sync. Each harness owns a fresh
/// queue, so tests never share expectations.
#[derive(Debug, Clone, Default)]
pub struct ExpectationQueue {
    inner: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expectation at the tail.
    pub fn push(&self, expectation: Expectation) {
        self.lock().push_back(expectation);
    }

    /// Removes and returns the head expectation.
    ///
    /// Returns `None` when the queue is empty; the caller decides what an
    /// unexpected request means.
    #[must_use]
    pub fn pop_next(&self) -> Option<Expectation> {
        self.lock().pop_front()
    }

    /// Returns true if no expectations remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the number of pending expectations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Lists pending expectations as "METHOD url" lines, head first.
    #[must_use]
    pub fn pending(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    // Poisoning is recovered so teardown can still inspect the queue
    // after a panicking test.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Expectation>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
