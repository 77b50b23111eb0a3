//! Dev-note domain model for the knowledge library.
//!
//! # Invariants
//! - `id` is unique within the notes collection.
//! - The notes collection is browsed newest-first; new notes are prepended
//!   by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed note kind vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteCategory {
    Snippet,
    Research,
    ChatLog,
    General,
}

/// A saved knowledge-library note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevNote {
    pub id: String,
    pub title: String,
    pub category: NoteCategory,
    pub content: String,
    /// Syntax hint for snippet rendering; absent for prose notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl DevNote {
    /// Creates a note with a fresh id and creation stamp.
    pub fn new(
        title: impl Into<String>,
        category: NoteCategory,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            category,
            content: content.into(),
            language: None,
            tags,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DevNote, NoteCategory};

    #[test]
    fn serialized_field_names_match_stored_format() {
        let note = DevNote::new("Sort stability", NoteCategory::Snippet, "...", vec![]);
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"category\":\"Snippet\""));
        // Absent language must not appear at all, matching the optional field.
        assert!(!json.contains("\"language\""));
    }

    #[test]
    fn chat_log_token_is_camel_cased_like_stored_data() {
        let json = serde_json::to_string(&NoteCategory::ChatLog).unwrap();
        assert_eq!(json, "\"ChatLog\"");
    }
}
