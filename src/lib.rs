// SPDX-License-Identifier: MPL-2.0
//! `smartchef` is the desktop companion client for the SmartChef recipe
//! sharing service, built with the Iced GUI framework.
//!
//! It browses and searches recipes, toggles likes, shares links, and keeps
//! the user's language and theme preferences in sync with the server. It
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/smartchef/0.3.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod net;
pub mod recipe;
pub mod session;
pub mod share;
pub mod ui;
