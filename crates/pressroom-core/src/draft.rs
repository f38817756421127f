//! Draft records held by the local store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An unpublished post.
///
/// Serialized with camelCase field names and ISO-8601 timestamps, which is
/// the exact shape the HTTP API exchanges with clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Opaque identifier (v4 UUID).
    pub id: String,

    /// Post title; also the source of the destination slug.
    pub title: String,

    /// Markdown body.
    pub body: String,

    /// When the draft was first saved.
    pub created_at: DateTime<Utc>,

    /// When the draft was last saved.
    pub updated_at: DateTime<Utc>,
}

impl Draft {
    /// Create a new draft with a fresh id and current timestamps.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for [`crate::store::DraftStore::save`]: an id selects an existing
/// draft to update, no id creates a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftInput {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub body: String,
}
