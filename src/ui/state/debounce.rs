// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncer.
//!
//! Each [`Debouncer::push`] replaces the pending value and resets the
//! deadline; [`Debouncer::poll`] emits the last value once the wait window
//! has elapsed with no further pushes. There is no leading-edge fire. The
//! caller drives polling from the application tick, which keeps the type
//! free of timers and directly testable.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Records a value, resetting the deadline to `now + wait`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.wait));
    }

    /// Emits the pending value if its deadline has passed. At most one
    /// emission per burst of pushes.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Whether a value is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
