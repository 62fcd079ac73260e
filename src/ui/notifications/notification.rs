// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::i18n::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const DISPLAY: Duration = Duration::from_millis(5000);

/// Length of the exit animation after the display window.
pub const EXIT: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification kind, determining glyph and accent color. All kinds share
/// the same dismiss schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph rendered next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "⚠",
            Kind::Info => "ⓘ",
        }
    }
}

/// Where in its lifecycle a notification is at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully shown.
    Visible,
    /// Display window elapsed; the exit animation is running.
    Leaving,
    /// Exit animation done; the card must be removed.
    Expired,
}

/// Message payload: either an i18n key resolved at render time, or verbatim
/// text (e.g. a message the server composed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Localized(String),
    Verbatim(String),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    text: Text,
    /// Arguments for message interpolation (localized text only).
    args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a notification whose text is an i18n key.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            text: Text::Localized(message_key.into()),
            args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Creates a notification carrying already-composed text, e.g. the
    /// `message` field of a settings-sync response.
    pub fn verbatim(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            text: Text::Verbatim(text.into()),
            args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Resolves the display text.
    #[must_use]
    pub fn resolve_text(&self, i18n: &I18n) -> String {
        match &self.text {
            Text::Verbatim(text) => text.clone(),
            Text::Localized(key) if self.args.is_empty() => i18n.tr(key),
            Text::Localized(key) => {
                let args: Vec<(&str, &str)> = self
                    .args
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
        }
    }

    /// The lifecycle phase at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.created_at);
        if age < DISPLAY {
            Phase::Visible
        } else if age < DISPLAY + EXIT {
            Phase::Leaving
        } else {
            Phase::Expired
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.phase(now) == Phase::Expired
    }
}
