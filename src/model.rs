//! # Domain Model
//!
//! Core data types for the recognition feed. Everything here is plain data:
//! no behavior beyond construction helpers and the filter-merge rule.
//!
//! Serde field names follow the camelCase convention of the seed JSON files
//! (`authorName`, `recipientAvatar`, ...), so the embedded collections and
//! any state snapshot a client serializes stay wire-compatible.
//!
//! ## Ownership Rules
//!
//! - [`Participant`] records are reference data. They are loaded once and
//!   never mutated; commands copy fields out of them, never write back.
//! - [`Post`] is immutable once created. The feed collection is append-only
//!   at the front (newest first).
//! - [`Filter`] is owned exclusively by the feed store and replaced — not
//!   mutated in place — on every filter change.
//! - [`NewPostDraft`] is ephemeral: produced by the (external) submission
//!   form, consumed exactly once by the add-post command, then discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::image::ImageFile;

/// A person who can give or receive recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub avatar: String,
}

/// A single peer-to-peer recognition record.
///
/// `kind` carries the recognition category label (serialized as `type`);
/// it doubles as the value the feed filter matches exactly against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub author_name: String,
    pub author_avatar: String,
    pub recipient_name: String,
    pub recipient_avatar: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub emoji: String,
    pub date: DateTime<Utc>,
    pub text: String,
    pub image: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// A fixed recognition category: emoji, human label, and the `value`
/// stamped onto posts (and matched by the type filter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionType {
    pub emoji: String,
    pub label: String,
    pub value: String,
}

/// The two filter dimensions of the feed. An empty string means "no
/// constraint" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub recognition_type: String,
}

/// A partial filter change. `None` fields keep their current value, so a
/// client can drive the search box and the type dropdown independently.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub recognition_type: Option<String>,
}

impl FilterUpdate {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            recognition_type: None,
        }
    }

    pub fn recognition_type(value: impl Into<String>) -> Self {
        Self {
            search_term: None,
            recognition_type: Some(value.into()),
        }
    }
}

impl Filter {
    /// Merge a partial update into this filter, field by field.
    pub fn merged(&self, update: FilterUpdate) -> Filter {
        Filter {
            search_term: update.search_term.unwrap_or_else(|| self.search_term.clone()),
            recognition_type: update
                .recognition_type
                .unwrap_or_else(|| self.recognition_type.clone()),
        }
    }
}

/// What the submission form hands to the add-post command.
///
/// `recipient` and `recognition_type` are optional because the form may
/// submit before the user picked them; the command treats such drafts as a
/// silent no-op (the form owns its own pre-submit feedback). `hashtags`
/// arrive already extracted via [`crate::text::extract_hashtags`].
#[derive(Debug, Clone, Default)]
pub struct NewPostDraft {
    pub recipient: Option<Participant>,
    pub recognition_type: Option<RecognitionType>,
    pub message: String,
    pub image: Option<ImageFile>,
    pub hashtags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_replaces_only_given_fields() {
        let filter = Filter {
            search_term: "ana".to_string(),
            recognition_type: "🙏 Obrigado!".to_string(),
        };

        let merged = filter.merged(FilterUpdate::search("bruno"));
        assert_eq!(merged.search_term, "bruno");
        assert_eq!(merged.recognition_type, "🙏 Obrigado!");

        let merged = filter.merged(FilterUpdate::recognition_type(""));
        assert_eq!(merged.search_term, "ana");
        assert_eq!(merged.recognition_type, "");
    }

    #[test]
    fn merged_with_empty_update_is_identity() {
        let filter = Filter {
            search_term: "ana".to_string(),
            recognition_type: "".to_string(),
        };
        assert_eq!(filter.merged(FilterUpdate::default()), filter);
    }

    #[test]
    fn post_deserializes_camel_case_with_optional_hashtags() {
        let json = r#"{
            "id": 7,
            "authorName": "Ana Souza",
            "authorAvatar": "https://example.test/a.jpg",
            "recipientName": "Bruno Lima",
            "recipientAvatar": "https://example.test/b.jpg",
            "type": "🙏 Obrigado!",
            "emoji": "🙏",
            "date": "2025-08-01T12:00:00Z",
            "text": "Valeu pela ajuda!",
            "image": "https://example.test/img.jpg"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.author_name, "Ana Souza");
        assert_eq!(post.kind, "🙏 Obrigado!");
        assert!(post.hashtags.is_empty());
    }

    #[test]
    fn post_serializes_kind_as_type() {
        let json = serde_json::to_value(Post {
            id: 1,
            author_name: "Ana".into(),
            author_avatar: "a".into(),
            recipient_name: "Bruno".into(),
            recipient_avatar: "b".into(),
            kind: "🙌 Bom trabalho!".into(),
            emoji: "🙌".into(),
            date: "2025-08-01T12:00:00Z".parse().unwrap(),
            text: "Mandou bem".into(),
            image: "i".into(),
            hashtags: vec!["teamwork".into()],
        })
        .unwrap();

        assert_eq!(json["type"], "🙌 Bom trabalho!");
        assert_eq!(json["authorName"], "Ana");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn filter_deserializes_missing_fields_as_empty() {
        let filter: Filter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, Filter::default());
    }
}
