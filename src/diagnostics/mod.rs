// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics log for silent failures.
//!
//! Several operations in this client fail without any user-visible effect
//! (settings sync transport errors, share fallbacks, config warnings). Those
//! sites record an event here so the failure is observable without surfacing
//! it in the UI. The buffer is bounded and evicts the oldest entries.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Default number of retained events.
pub const DEFAULT_CAPACITY: usize = 200;

/// A diagnostic event captured during a silent failure path.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The settings-sync request failed in transport or decode.
    SyncFailure { detail: String },
    /// A share attempt failed before the clipboard fallback kicked in.
    ShareFailure { detail: String },
    /// A recipe fetch failed.
    FetchFailure { detail: String },
    /// The configuration could not be loaded or saved.
    ConfigWarning { detail: String },
}

/// An event plus the moment it was recorded.
#[derive(Debug, Clone)]
pub struct TimestampedEvent {
    pub at: Instant,
    pub event: Event,
}

/// Bounded event buffer. Oldest entries are evicted at capacity.
#[derive(Debug)]
pub struct Buffer {
    events: VecDeque<TimestampedEvent>,
    capacity: usize,
}

impl Buffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, event: Event) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(TimestampedEvent {
            at: Instant::now(),
            event,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimestampedEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Cloneable handle to the shared diagnostics buffer.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<Buffer>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event. A poisoned lock drops the event rather than panic.
    pub fn log(&self, event: Event) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(event);
        }
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TimestampedEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
