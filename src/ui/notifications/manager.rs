// SPDX-License-Identifier: MPL-2.0
//! Toast queue. Bounds how many cards are on screen at a time and keeps a
//! short history for the bell menu.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts rendered at once. Further notifications wait in
/// the queue and are promoted in arrival order.
pub const MAX_VISIBLE: usize = 3;

/// Entries remembered for the bell menu.
pub const HISTORY_LIMIT: usize = 20;

/// Messages emitted by a toast card.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Holds pending and on-screen notifications.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Notification>,
    queue: VecDeque<Notification>,
    history: VecDeque<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification. Shows it immediately if a slot is free,
    /// otherwise queues it.
    pub fn push(&mut self, notification: Notification) {
        self.remember(notification.clone());
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a card immediately, regardless of its phase. Searches both
    /// the visible set and the queue.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|n| n.id() != id);
        self.queue.retain(|n| n.id() != id);
        self.promote(Instant::now());
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    /// Drops expired cards and fills freed slots from the queue. Call this
    /// on every tick while toasts are active.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired(now));
        // A notification can also age out while still queued.
        self.queue.retain(|n| !n.is_expired(now));
        self.promote(now);
    }

    fn promote(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(n) if n.is_expired(now) => continue,
                Some(n) => self.visible.push(n),
                None => break,
            }
        }
    }

    fn remember(&mut self, notification: Notification) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(notification);
    }

    /// Cards currently on screen, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    /// Recent notifications for the bell menu, newest first.
    pub fn history(&self) -> impl Iterator<Item = &Notification> {
        self.history.iter().rev()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether any card is on screen or waiting. Drives the tick
    /// subscription.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }
}
