// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are small auto-dismissing cards. Every kind follows the
//! same schedule: 5000 ms visible, then a 300 ms leaving phase, then
//! removal. Manual dismissal removes the card immediately at any phase.
//! Server-delivered messages enter the same pipeline as locally created
//! ones, timed from receipt.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use toast::Toast;
