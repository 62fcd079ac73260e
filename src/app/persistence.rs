// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saving user preferences to disk is separate from syncing them to the
//! server: persistence always happens, the sync only when a session with a
//! security token exists.

use crate::config;
use crate::diagnostics::{self, DiagnosticsHandle};
use crate::i18n::I18n;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config. Unsupported
/// locales are ignored by `set_locale`, so only supported ones get saved.
pub fn apply_language_change(
    i18n: &mut I18n,
    diagnostics: &DiagnosticsHandle,
    locale: LanguageIdentifier,
) {
    i18n.set_locale(locale);

    // Guarded during tests to keep isolation: unit tests exercise the
    // locale switch directly without touching the real config file.
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(i18n.current_locale().to_string());

    if let Err(error) = config::save(&cfg) {
        diagnostics.log(diagnostics::Event::ConfigWarning {
            detail: format!("failed to save language: {error}"),
        });
    }
}

/// Persists the theme mode to config.
pub fn persist_theme(diagnostics: &DiagnosticsHandle, theme_mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.theme = theme_mode;

    if let Err(error) = config::save(&cfg) {
        diagnostics.log(diagnostics::Event::ConfigWarning {
            detail: format!("failed to save theme: {error}"),
        });
    }
}
