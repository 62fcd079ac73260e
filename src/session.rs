// SPDX-License-Identifier: MPL-2.0
//! Client-side view of the server session.
//!
//! The desktop client never mints credentials itself: the user id, username,
//! and security token are issued by the SmartChef web service and injected
//! here (via CLI flags or the login dialog). The settings endpoint requires
//! the token; without one, state-changing calls are skipped entirely.

/// Anti-forgery token accepted by the settings endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wraps a non-empty token string. Empty input yields `None`.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session state mirrored from the server.
///
/// `form_token` corresponds to the hidden form field rendered into pages for
/// a logged-in user; `cookie_token` to the `csrftoken` cookie. Either one is
/// sufficient for the settings endpoint, with the form field taking priority.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub form_token: Option<CsrfToken>,
    pub cookie_token: Option<CsrfToken>,
}

impl Session {
    /// A session with no user and no tokens.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether a logged-in user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Resolves the security token: hidden form field first, then the cookie.
    /// `None` means state-changing requests must be skipped.
    #[must_use]
    pub fn resolve_csrf_token(&self) -> Option<&CsrfToken> {
        self.form_token.as_ref().or(self.cookie_token.as_ref())
    }

    /// Display name for the user menu.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Guest")
    }

    /// Drops the user and both tokens.
    pub fn clear(&mut self) {
        *self = Self::anonymous();
    }
}
