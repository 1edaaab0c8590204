//! Note domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the backing document and all callers.
//! - Provide the tag-equality and keyword-substring predicates used by the
//!   repository's query operations.
//!
//! # Invariants
//! - `id` is generated at creation and never reused for another note.
//! - `created_at` is set once at creation and never rewritten.
//! - Tags are stored exactly as supplied; lowercasing happens only inside
//!   the matching predicates.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note in the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Wire format of `created_at`: ISO-8601-like, seconds precision, no
/// timezone suffix.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Canonical note record, persisted verbatim in the backing JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for update/delete addressing.
    pub id: NoteId,
    /// Note title. Accepted as-is; callers validate non-emptiness.
    pub title: String,
    /// Note body. Accepted as-is; callers validate non-emptiness.
    pub body: String,
    /// Ordered tag labels, case preserved. Optional on the wire.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp text. Optional on the wire for older documents.
    #[serde(default)]
    pub created_at: String,
}

/// Caller-supplied fields shared by the add and update operations.
///
/// Empty strings are legal at this layer; presentation layers reject empty
/// input before calling the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags,
        }
    }
}

impl Note {
    /// Creates a new note with a generated stable ID and the current UTC
    /// creation timestamp.
    pub fn new(draft: NoteDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            body: draft.body,
            tags: draft.tags,
            created_at: Utc::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }

    /// Replaces title, body and tags in place.
    ///
    /// # Invariants
    /// - `id` and `created_at` are never touched.
    pub fn apply_draft(&mut self, draft: NoteDraft) {
        self.title = draft.title;
        self.body = draft.body;
        self.tags = draft.tags;
    }

    /// Returns whether any stored tag equals `tag`, case-insensitively.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|stored| stored.to_lowercase() == tag)
    }

    /// Returns whether the lowercased keyword is a substring of the
    /// lowercased title, body, or any lowercased tag.
    ///
    /// The empty keyword matches every note.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let pattern = keyword.to_lowercase();
        self.title.to_lowercase().contains(&pattern)
            || self.body.to_lowercase().contains(&pattern)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&pattern))
    }
}
