// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state helpers.

pub mod debounce;
pub mod lazy;

pub use debounce::Debouncer;
pub use lazy::{visible_range, LazyLoader};
