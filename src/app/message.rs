// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::net::recipes::LikeResponse;
use crate::net::settings::SettingsResponse;
use crate::recipe::{Recipe, RecipeId};
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::recipes;
use crate::ui::theming::ThemeMode;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Error payload for task results: the toast key to show and a detail
/// string for the diagnostics buffer.
#[derive(Debug, Clone)]
pub struct TaskError {
    pub key: &'static str,
    pub detail: String,
}

impl From<crate::error::Error> for TaskError {
    fn from(error: crate::error::Error) -> Self {
        Self {
            key: error.i18n_key(),
            detail: error.to_string(),
        }
    }
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Recipes(recipes::Message),
    Login(login::Message),
    Notification(notifications::NotificationMessage),
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    /// Periodic tick driving the toast lifecycle and the search debouncer.
    Tick(Instant),
    EscapePressed,
    TabPressed {
        shift: bool,
    },
    /// A mouse press no widget claimed; dismisses open dropdowns.
    OutsideClick,
    /// Share the application link itself.
    ShareApp,
    RecipesFetched(Result<Vec<Recipe>, TaskError>),
    LikeCompleted(RecipeId, Result<LikeResponse, TaskError>),
    ThumbnailFetched(RecipeId, Result<Vec<u8>, TaskError>),
    /// Result from pushing a settings change to the server.
    SettingsSynced(Result<SettingsResponse, TaskError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `hi`, `mr`).
    pub lang: Option<String>,
    /// Optional theme override (`light` or `dark`).
    pub theme: Option<String>,
    /// Optional server base URL override.
    pub server: Option<String>,
    /// Username of an externally established session (development aid).
    pub user: Option<String>,
    /// Security token of an externally established session.
    pub token: Option<String>,
}
