// SPDX-License-Identifier: MPL-2.0
//! Focus trap for modal containers.
//!
//! While a modal is open, Tab cycles forward over its focusable descendants
//! and Shift+Tab cycles backward, wrapping at both ends so focus never
//! leaves the container. The trap holds the focus order as a list of widget
//! id strings; the application issues the actual focus operation.

/// Pure index-cycling rule used by the trap.
#[must_use]
pub fn next_index(current: usize, len: usize, backward: bool) -> usize {
    debug_assert!(len > 0);
    if backward {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else {
        (current + 1) % len
    }
}

#[derive(Debug, Clone)]
pub struct FocusTrap {
    targets: Vec<&'static str>,
    current: usize,
}

impl FocusTrap {
    /// Builds a trap over an ordered, non-empty list of focusable widget ids.
    #[must_use]
    pub fn new(targets: Vec<&'static str>) -> Self {
        debug_assert!(!targets.is_empty());
        Self {
            targets,
            current: 0,
        }
    }

    /// The id currently holding focus.
    #[must_use]
    pub fn current(&self) -> &'static str {
        self.targets[self.current]
    }

    /// Advances focus on Tab (or Shift+Tab when `backward`) and returns the
    /// id that should receive focus.
    pub fn advance(&mut self, backward: bool) -> &'static str {
        self.current = next_index(self.current, self.targets.len(), backward);
        self.targets[self.current]
    }

    /// Moves the trap onto `id` if it is one of the targets, e.g. after the
    /// user clicks a field directly.
    pub fn set_current(&mut self, id: &str) {
        if let Some(pos) = self.targets.iter().position(|t| *t == id) {
            self.current = pos;
        }
    }
}
