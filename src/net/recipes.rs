// SPDX-License-Identifier: MPL-2.0
//! Recipe API client: listing, like toggling, thumbnail bytes.

use crate::error::{ApiError, Result};
use crate::net::CSRF_FIELD;
use crate::recipe::{Recipe, RecipeId};
use crate::session::CsrfToken;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RecipesEnvelope {
    recipes: Vec<Recipe>,
}

/// Response of `POST /like/{id}/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LikeResponse {
    pub success: bool,
    /// `"liked"` or `"unliked"`.
    #[serde(default)]
    pub action: Option<String>,
    /// New like count after the toggle.
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches recipes, optionally filtered by category id and search text.
    pub async fn fetch(&self, category: &str, search: &str) -> Result<Vec<Recipe>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if !category.is_empty() && category != "all" {
            query.push(("category", category));
        }
        if !search.is_empty() {
            query.push(("search", search));
        }

        let envelope: RecipesEnvelope = self
            .http
            .get(format!("{}/api/recipes/", self.base_url))
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        Ok(envelope.recipes)
    }

    /// Toggles the like state of a recipe. Requires a security token.
    pub async fn toggle_like(&self, id: &RecipeId, token: &CsrfToken) -> Result<LikeResponse> {
        let body = [(CSRF_FIELD, token.as_str())];
        let response: LikeResponse = self
            .http
            .post(format!("{}/like/{}/", self.base_url, id.as_str()))
            .form(&body)
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

    /// Downloads the raw bytes of a recipe thumbnail. Relative image paths
    /// are resolved against the server base URL.
    pub async fn fetch_thumbnail(&self, image_url: &str) -> Result<Vec<u8>> {
        let url = if image_url.starts_with("http://") || image_url.starts_with("https://") {
            image_url.to_string()
        } else {
            format!("{}{}", self.base_url, image_url)
        };

        let bytes = self.http.get(url).send().await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipes_envelope_decodes() {
        let json = r#"{"recipes": [{"_id": "1", "title": "Poha", "likes": []}]}"#;
        let envelope: RecipesEnvelope = serde_json::from_str(json).expect("decode");
        assert_eq!(envelope.recipes.len(), 1);
        assert_eq!(envelope.recipes[0].title, "Poha");
    }

    #[test]
    fn like_response_decodes_toggle_result() {
        let json = r#"{"success": true, "action": "liked", "count": 4}"#;
        let response: LikeResponse = serde_json::from_str(json).expect("decode");
        assert!(response.success);
        assert_eq!(response.action.as_deref(), Some("liked"));
        assert_eq!(response.count, Some(4));
    }

    #[test]
    fn like_response_tolerates_failure_shape() {
        let json = r#"{"success": false, "message": "Failed to like recipe"}"#;
        let response: LikeResponse = serde_json::from_str(json).expect("decode");
        assert!(!response.success);
        assert_eq!(response.count, None);
    }
}
