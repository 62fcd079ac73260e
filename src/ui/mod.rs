// SPDX-License-Identifier: MPL-2.0
//! User interface components and state helpers.

pub mod design_tokens;
pub mod focus;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod recipes;
pub mod settings;
pub mod state;
pub mod theming;
