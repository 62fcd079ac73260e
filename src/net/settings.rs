// SPDX-License-Identifier: MPL-2.0
//! Settings-sync client for `POST /settings/update/`.
//!
//! Building the request body is split from sending it so the token-gating
//! rule is testable without a server: [`plan_request`] returns `None` when no
//! security token resolves, and the caller must then perform zero network
//! I/O. The response is JSON `{ "success": bool, "message"?: string }`.

use crate::error::{ApiError, Result};
use crate::net::CSRF_FIELD;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// What to do when the sync request fails in transport or decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log to diagnostics only; the user sees nothing.
    #[default]
    Ignore,
    /// Show an error toast.
    Toast,
    /// Retry the request once before giving up (then log).
    RetryOnce,
}

/// Decoded response from the settings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Builds the form body for a settings update, or `None` when the session
/// has no resolvable security token (in which case no request may be made).
#[must_use]
pub fn plan_request(
    session: &Session,
    changes: &[(String, String)],
) -> Option<Vec<(String, String)>> {
    let token = session.resolve_csrf_token()?;
    let mut body: Vec<(String, String)> = changes.to_vec();
    body.push((CSRF_FIELD.to_string(), token.as_str().to_string()));
    Some(body)
}

/// HTTP client bound to a server base URL.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SettingsClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/settings/update/", self.base_url)
    }

    /// Sends one settings update. `body` must come from [`plan_request`].
    pub async fn update(&self, body: &[(String, String)]) -> Result<SettingsResponse> {
        let response: SettingsResponse = self
            .http
            .post(self.endpoint())
            .form(body)
            .send()
            .await?
            .json()
            .await?;

        if response.success {
            Ok(response)
        } else {
            Err(ApiError::Rejected(response.message).into())
        }
    }

    /// Like [`SettingsClient::update`], honoring the failure policy's
    /// retry-once behavior. `Ignore` and `Toast` are handled by the caller;
    /// only the retry lives here because it changes what goes on the wire.
    pub async fn update_with_policy(
        &self,
        body: &[(String, String)],
        policy: FailurePolicy,
    ) -> Result<SettingsResponse> {
        match self.update(body).await {
            Err(crate::error::Error::Http(_)) if policy == FailurePolicy::RetryOnce => {
                self.update(body).await
            }
            outcome => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CsrfToken;

    fn change(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn plan_request_without_token_is_none() {
        let session = Session::anonymous();
        let plan = plan_request(&session, &[change("theme", "dark")]);
        assert!(plan.is_none());
    }

    #[test]
    fn plan_request_appends_csrf_field() {
        let session = Session {
            user_id: Some("u1".into()),
            username: Some("asha".into()),
            form_token: CsrfToken::new("tok-123"),
            cookie_token: None,
        };
        let plan = plan_request(&session, &[change("language", "hi")]).expect("token present");

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0], change("language", "hi"));
        assert_eq!(plan[1], change(CSRF_FIELD, "tok-123"));
    }

    #[test]
    fn plan_request_uses_cookie_token_as_fallback() {
        let session = Session {
            user_id: Some("u1".into()),
            username: None,
            form_token: None,
            cookie_token: CsrfToken::new("cookie-tok"),
        };
        let plan = plan_request(&session, &[change("theme", "light")]).expect("token present");
        assert_eq!(plan[1], change(CSRF_FIELD, "cookie-tok"));
    }

    #[test]
    fn failure_policy_defaults_to_ignore() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Ignore);
    }

    #[test]
    fn settings_response_decodes_without_message() {
        let response: SettingsResponse =
            serde_json::from_str(r#"{"success": true}"#).expect("decode");
        assert!(response.success);
        assert!(response.message.is_none());
    }

    #[test]
    fn settings_response_decodes_with_message() {
        let response: SettingsResponse =
            serde_json::from_str(r#"{"success": true, "message": "Dark mode activated"}"#)
                .expect("decode");
        assert_eq!(response.message.as_deref(), Some("Dark mode activated"));
    }

    #[test]
    fn endpoint_is_fixed_path() {
        let client = SettingsClient::new("https://smartchef.example");
        assert_eq!(
            client.endpoint(),
            "https://smartchef.example/settings/update/"
        );
    }
}
