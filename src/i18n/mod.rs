// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Bundles are embedded at compile time from `assets/i18n/` and looked up by
//! BCP-47 locale (`en`, `hi`, `mr`). Keys missing from the active locale fall
//! back to the default-language (`en`) payload.

pub mod fluent;

pub use fluent::I18n;

/// Locale used when no preference resolves and as the fallback payload source.
pub const DEFAULT_LOCALE: &str = "en";
