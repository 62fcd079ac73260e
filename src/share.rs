// SPDX-License-Identifier: MPL-2.0
//! Share planning with clipboard fallback.
//!
//! The rules mirror the web client: prefer a native share capability; if it
//! is absent or fails, copy the URL to the clipboard and confirm with a
//! toast. A user-initiated cancellation is a non-error: no fallback, no
//! toast. Desktop platforms have no native share sheet, so the default
//! target always reports `Unavailable` and the clipboard path carries the
//! feature.
//!
//! The copied toast is optimistic. Clipboard writes go through a
//! fire-and-forget windowing call that reports no result, so the toast is
//! shown when the write is issued, not when it lands. Failures that happen
//! before the clipboard step (a broken native share) are still logged to
//! diagnostics via [`SharePlan::CopyAfterFailure`].

/// Public page for "share this app".
pub const APP_URL: &str = "https://smartchef.example";

/// Result of a native share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet completed.
    Completed,
    /// The user backed out. Treated as success-shaped: nothing else happens.
    Cancelled,
    /// No native share capability on this platform.
    Unavailable,
    /// The capability exists but the attempt failed.
    Failed(String),
}

/// What the caller should do after a share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharePlan {
    /// Nothing further: shared natively or cancelled by the user.
    Done,
    /// Copy this text to the clipboard and show the copied toast.
    CopyToClipboard(String),
    /// Copy failed upstream; log the detail and fall back to the clipboard.
    CopyAfterFailure { text: String, detail: String },
}

/// A native share capability.
pub trait ShareTarget {
    fn share(&self, title: &str, url: &str) -> ShareOutcome;
}

/// The desktop default: no native share sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShare;

impl ShareTarget for SystemShare {
    fn share(&self, _title: &str, _url: &str) -> ShareOutcome {
        ShareOutcome::Unavailable
    }
}

/// Maps a share outcome to the follow-up action. The clipboard receives
/// exactly the URL string, never the title.
#[must_use]
pub fn plan(outcome: ShareOutcome, url: &str) -> SharePlan {
    match outcome {
        ShareOutcome::Completed | ShareOutcome::Cancelled => SharePlan::Done,
        ShareOutcome::Unavailable => SharePlan::CopyToClipboard(url.to_string()),
        ShareOutcome::Failed(detail) => SharePlan::CopyAfterFailure {
            text: url.to_string(),
            detail,
        },
    }
}

/// Shares a recipe link through `target`, falling back per [`plan`].
#[must_use]
pub fn share_recipe(target: &dyn ShareTarget, title: &str, url: &str) -> SharePlan {
    plan(target.share(title, url), url)
}

/// Shares the application link itself.
#[must_use]
pub fn share_app(target: &dyn ShareTarget) -> SharePlan {
    plan(target.share("SmartChef", APP_URL), APP_URL)
}
