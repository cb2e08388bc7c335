//! The building blocks of a search call.
//!
//! | Type            | Purpose                                      |
//! |-----------------|----------------------------------------------|
//! | `Document`      | Externally owned record, read-only here      |
//! | `Field`         | Closed set of snippet-bearing fields         |
//! | `FieldMatch`    | Contexts found in one field of one document  |
//! | `SearchResult`  | One ranked hit, owned by the caller          |
//! | `SearchOptions` | Per-call knobs with sensible defaults        |
//!
//! # Invariants
//!
//! - `SearchResult.matches` is non-empty for every result the service
//!   returns: presence in the result list is gated on textual matches,
//!   not on the relevance score.
//! - `FieldMatch` entries appear in `Field` declaration order
//!   (title, description, content) and each carries at least one context.
//! - `relevance` is non-negative and ordinal only; scores are comparable
//!   within one result set, not across queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A searchable document, fed in from the hosting application.
///
/// The engine never mutates a `Document`. Optional fields may be absent in
/// upstream payloads; they deserialize to `None` and contribute nothing to
/// matching or scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque unique identifier.
    pub id: String,
    /// Short display title, always searchable.
    pub title: String,
    /// Optional summary text.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional long-form body, may be large.
    #[serde(default)]
    pub content: Option<String>,
    /// Tag labels; matched as whole labels for exact hits and as
    /// substrings for partial hits.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Document {
    /// Description text, or empty if absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Content text, or empty if absent.
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// The fields that can carry match contexts.
///
/// A closed enum rather than free-form field-name strings: the set of
/// snippet-bearing fields is fixed, and match assembly can be checked
/// exhaustively. Tags deliberately have no variant here - tag hits
/// contribute to relevance but never produce contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Content => "content",
        };
        f.write_str(name)
    }
}

/// All contexts found in one field of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    /// Which field the contexts came from.
    pub field: Field,
    /// Bounded snippets around each occurrence, in text order.
    pub contexts: Vec<String>,
}

/// One ranked search hit.
///
/// Holds a shared handle to the document so results stay valid even if the
/// service's collection is swapped while the caller is still rendering them.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// The matched document (shared, never copied).
    pub document: Arc<Document>,
    /// Ordinal ranking score; higher ranks earlier.
    pub relevance: f64,
    /// Per-field contexts, in title / description / content order.
    /// Non-empty for every returned result.
    pub matches: Vec<FieldMatch>,
}

/// Per-call search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Check the `content` field for matches. Default `true`.
    pub include_content: bool,
    /// Check `title` and `description` for matches. Default `true`.
    pub include_metadata: bool,
    /// Upper bound on the number of results. Default 20; `0` means
    /// "return nothing".
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            include_content: true,
            include_metadata: true,
            limit: 20,
        }
    }
}
