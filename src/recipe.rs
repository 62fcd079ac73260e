// SPDX-License-Identifier: MPL-2.0
//! Recipe domain model and derived presentation fields.
//!
//! Recipes arrive as JSON from the SmartChef API. Older documents store
//! `likes` as a plain count while newer ones store the list of user ids, so
//! deserialization accepts both shapes. Derived fields (average rating, like
//! count, localized category name) are computed here rather than trusted
//! from the payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Rating shown for recipes nobody has rated yet.
pub const UNRATED_DEFAULT: f32 = 4.5;

/// Identifier assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct RecipeId(pub String);

impl RecipeId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `likes` as stored server-side: either a legacy count or a user-id list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Likes {
    Users(Vec<String>),
    Count(u32),
}

impl Default for Likes {
    fn default() -> Self {
        Likes::Users(Vec::new())
    }
}

impl Likes {
    #[must_use]
    pub fn count(&self) -> u32 {
        match self {
            Likes::Users(users) => users.len() as u32,
            Likes::Count(count) => *count,
        }
    }

    /// Whether the given user id appears in the like list. Legacy counts
    /// carry no membership information and always answer `false`.
    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        match self {
            Likes::Users(users) => users.iter().any(|u| u == user_id),
            Likes::Count(_) => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub likes: Likes,
    #[serde(default)]
    pub ratings: Vec<u32>,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Average of all ratings rounded to one decimal, or the default for
    /// unrated recipes.
    #[must_use]
    pub fn avg_rating(&self) -> f32 {
        if self.ratings.is_empty() {
            return UNRATED_DEFAULT;
        }
        let sum: u32 = self.ratings.iter().sum();
        let avg = sum as f32 / self.ratings.len() as f32;
        (avg * 10.0).round() / 10.0
    }

    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn likes_count(&self) -> u32 {
        self.likes.count()
    }
}

/// A recipe category with localized display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub name_hi: &'static str,
    pub name_mr: &'static str,
    pub icon: &'static str,
}

impl Category {
    /// Display name for a language code, defaulting to English.
    #[must_use]
    pub fn localized_name(&self, lang: &str) -> &'static str {
        match lang {
            "hi" => self.name_hi,
            "mr" => self.name_mr,
            _ => self.name,
        }
    }
}

/// The fixed category catalog, `all` first.
#[must_use]
pub fn categories() -> &'static [Category] {
    &[
        Category {
            id: "all",
            name: "All Recipes",
            name_hi: "सभी रेसिपी",
            name_mr: "सर्व रेसिपी",
            icon: "🍽️",
        },
        Category {
            id: "veg",
            name: "Vegetarian",
            name_hi: "शाकाहारी",
            name_mr: "शाकाहारी",
            icon: "🥗",
        },
        Category {
            id: "non-veg",
            name: "Non-Vegetarian",
            name_hi: "मांसाहारी",
            name_mr: "मांसाहारी",
            icon: "🍗",
        },
        Category {
            id: "desserts",
            name: "Desserts",
            name_hi: "मिठाई",
            name_mr: "मिठाई",
            icon: "🍰",
        },
        Category {
            id: "drinks",
            name: "Drinks",
            name_hi: "पेय",
            name_mr: "पेय",
            icon: "🥤",
        },
        Category {
            id: "snacks",
            name: "Snacks",
            name_hi: "नाश्ता",
            name_mr: "स्नॅक्स",
            icon: "🍿",
        },
    ]
}

/// Human-readable category name for a raw category id. Unknown ids (and the
/// legacy `dessert` spelling) map conservatively.
#[must_use]
pub fn category_display_name(id: &str, lang: &str) -> &'static str {
    let id = if id == "dessert" { "desserts" } else { id };
    categories()
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.localized_name(lang))
        .unwrap_or("Other")
}

/// Selects the top `n` recipes by like count, most-liked first. Ties go to
/// the newer recipe; documents without a timestamp sort last among equals.
#[must_use]
pub fn trending(recipes: &[Recipe], n: usize) -> Vec<&Recipe> {
    let mut sorted: Vec<&Recipe> = recipes.iter().collect();
    sorted.sort_by(|a, b| {
        b.likes_count()
            .cmp(&a.likes_count())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, likes: Likes, ratings: Vec<u32>) -> Recipe {
        Recipe {
            id: RecipeId(id.to_string()),
            title: format!("Recipe {id}"),
            category: "veg".to_string(),
            ingredients: vec![],
            steps: vec![],
            prep_time: None,
            cook_time: None,
            servings: Some(2),
            image_url: None,
            likes,
            ratings,
            views: 0,
            created_at: None,
        }
    }

    #[test]
    fn avg_rating_defaults_when_unrated() {
        let r = recipe("1", Likes::default(), vec![]);
        assert_eq!(r.avg_rating(), UNRATED_DEFAULT);
        assert_eq!(r.rating_count(), 0);
    }

    #[test]
    fn avg_rating_rounds_to_one_decimal() {
        let r = recipe("1", Likes::default(), vec![5, 4, 4]);
        assert_eq!(r.avg_rating(), 4.3);
        assert_eq!(r.rating_count(), 3);
    }

    #[test]
    fn likes_count_handles_both_shapes() {
        assert_eq!(Likes::Users(vec!["a".into(), "b".into()]).count(), 2);
        assert_eq!(Likes::Count(7).count(), 7);
    }

    #[test]
    fn likes_membership_only_for_user_lists() {
        let users = Likes::Users(vec!["u1".into()]);
        assert!(users.contains("u1"));
        assert!(!users.contains("u2"));
        assert!(!Likes::Count(5).contains("u1"));
    }

    #[test]
    fn deserializes_legacy_numeric_likes() {
        let json = r#"{"_id": "abc", "title": "Poha", "likes": 12}"#;
        let r: Recipe = serde_json::from_str(json).expect("deserialize");
        assert_eq!(r.likes_count(), 12);
    }

    #[test]
    fn deserializes_user_list_likes() {
        let json = r#"{"_id": "abc", "title": "Poha", "likes": ["u1", "u2"]}"#;
        let r: Recipe = serde_json::from_str(json).expect("deserialize");
        assert_eq!(r.likes_count(), 2);
    }

    #[test]
    fn category_display_name_localizes() {
        assert_eq!(category_display_name("veg", "en"), "Vegetarian");
        assert_eq!(category_display_name("veg", "hi"), "शाकाहारी");
        assert_eq!(category_display_name("drinks", "mr"), "पेय");
    }

    #[test]
    fn category_display_name_handles_unknown_and_legacy() {
        assert_eq!(category_display_name("mystery", "en"), "Other");
        assert_eq!(category_display_name("dessert", "en"), "Desserts");
    }

    #[test]
    fn trending_returns_top_three_by_likes() {
        let recipes = vec![
            recipe("low", Likes::Count(1), vec![]),
            recipe("top", Likes::Count(10), vec![]),
            recipe("mid", Likes::Count(5), vec![]),
            recipe("zero", Likes::Count(0), vec![]),
        ];
        let top = trending(&recipes, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].id.as_str(), "top");
        assert_eq!(top[1].id.as_str(), "mid");
        assert_eq!(top[2].id.as_str(), "low");
    }

    #[test]
    fn trending_handles_short_input() {
        let recipes = vec![recipe("only", Likes::Count(2), vec![])];
        assert_eq!(trending(&recipes, 3).len(), 1);
    }

    #[test]
    fn trending_breaks_like_ties_by_recency() {
        let mut older = recipe("older", Likes::Count(5), vec![]);
        older.created_at = Some("2026-01-01T00:00:00Z".parse().unwrap());
        let mut newer = recipe("newer", Likes::Count(5), vec![]);
        newer.created_at = Some("2026-06-01T00:00:00Z".parse().unwrap());
        let undated = recipe("undated", Likes::Count(5), vec![]);

        let recipes = vec![undated, older, newer];
        let top = trending(&recipes, 3);
        assert_eq!(top[0].id.as_str(), "newer");
        assert_eq!(top[1].id.as_str(), "older");
        assert_eq!(top[2].id.as_str(), "undated");
    }
}
