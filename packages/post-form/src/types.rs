//! Wire types for the Category Directory and Post Storage services.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Categories
// ============================================================================

/// Identifier of a category.
///
/// Back ends disagree on whether ids are strings or numbers, so both
/// deserialize; the value is always carried as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(CategoryId(WireId::deserialize(deserializer)?.into()))
    }
}

/// An id as servers send it: a string or an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Signed(n) => n.to_string(),
            WireId::Unsigned(n) => n.to_string(),
        }
    }
}

/// A category offered in the selection control.
///
/// Accepts `id`, `_id` or both on the wire; `id` wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireCategory")]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

#[derive(Deserialize)]
struct WireCategory {
    id: Option<CategoryId>,
    #[serde(rename = "_id")]
    underscore_id: Option<CategoryId>,
    label: String,
}

impl TryFrom<WireCategory> for Category {
    type Error = String;

    fn try_from(wire: WireCategory) -> std::result::Result<Self, Self::Error> {
        let id = wire
            .id
            .or(wire.underscore_id)
            .ok_or_else(|| format!("category {:?} has neither `id` nor `_id`", wire.label))?;
        Ok(Category {
            id,
            label: wire.label,
        })
    }
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// Post as echoed back by the Post Storage Service.
///
/// Only the fields the form cares about are typed; anything else the server
/// returns is kept in `extra`. Any 2xx JSON object decodes: ids may be
/// strings or integers, and missing or `null` fields fall back to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireCreatedPost")]
pub struct CreatedPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct WireCreatedPost {
    #[serde(default)]
    id: Option<WireId>,
    #[serde(default, rename = "_id")]
    underscore_id: Option<WireId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl From<WireCreatedPost> for CreatedPost {
    fn from(wire: WireCreatedPost) -> Self {
        CreatedPost {
            id: wire.id.or(wire.underscore_id).map(String::from),
            title: wire.title.unwrap_or_default(),
            content: wire.content.unwrap_or_default(),
            tags: wire.tags.unwrap_or_default(),
            extra: wire.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_accepts_underscore_id() {
        let category: Category =
            serde_json::from_value(json!({ "_id": "64f1", "label": "Rust" })).unwrap();

        assert_eq!(category, Category::new("64f1", "Rust"));
    }

    #[test]
    fn test_category_accepts_numeric_id() {
        let categories: Vec<Category> = serde_json::from_value(json!([
            { "id": 7, "label": "News" },
            { "id": "8", "label": "Tutorials" },
        ]))
        .unwrap();

        assert_eq!(categories[0].id.as_str(), "7");
        assert_eq!(categories[1].id.as_str(), "8");
    }

    #[test]
    fn test_category_without_id_is_rejected() {
        let result: std::result::Result<Category, _> =
            serde_json::from_value(json!({ "label": "Orphan" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_created_post_keeps_unknown_fields() {
        let post: CreatedPost = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Hello",
            "content": "World",
            "tags": ["a", "b"],
            "categories": "c1",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(post.id.as_deref(), Some("p1"));
        assert_eq!(post.tags, vec!["a", "b"]);
        assert_eq!(post.extra.get("categories"), Some(&json!("c1")));
        assert!(post.extra.contains_key("createdAt"));
    }

    #[test]
    fn test_created_post_tolerates_sparse_body() {
        let post: CreatedPost = serde_json::from_value(json!({})).unwrap();
        assert_eq!(post, CreatedPost::default());
    }

    #[test]
    fn test_category_with_both_id_keys_prefers_id() {
        let category: Category = serde_json::from_value(json!({
            "id": "c1",
            "_id": "64f1",
            "label": "Rust"
        }))
        .unwrap();

        assert_eq!(category, Category::new("c1", "Rust"));
    }

    #[test]
    fn test_created_post_accepts_numeric_id() {
        let post: CreatedPost =
            serde_json::from_value(json!({ "id": 42, "title": "Hello" })).unwrap();

        assert_eq!(post.id.as_deref(), Some("42"));
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn test_created_post_treats_nulls_as_empty() {
        let post: CreatedPost = serde_json::from_value(json!({
            "_id": "p1",
            "title": null,
            "content": null,
            "tags": null
        }))
        .unwrap();

        assert_eq!(post.id.as_deref(), Some("p1"));
        assert!(post.title.is_empty());
        assert!(post.content.is_empty());
        assert!(post.tags.is_empty());
        assert!(post.extra.is_empty());
    }

    #[test]
    fn test_created_post_with_both_id_keys_prefers_id() {
        let post: CreatedPost =
            serde_json::from_value(json!({ "id": 7, "_id": "64f1" })).unwrap();

        assert_eq!(post.id.as_deref(), Some("7"));
        assert!(!post.extra.contains_key("_id"));
    }
}
