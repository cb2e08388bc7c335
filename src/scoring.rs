//! Relevance scoring for ranked search results.
//!
//! One number per (document, query) pair, used purely for ordering within a
//! single result set. Scores are not probabilities and are not normalized
//! across queries.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_DOMINANCE
//! Per-occurrence weights must satisfy:
//!
//! ```text
//! TITLE_WEIGHT > TAG_EXACT_WEIGHT > DESCRIPTION_WEIGHT > TAG_PARTIAL_WEIGHT >= CONTENT_WEIGHT
//! ```
//!
//! so a single title hit outranks a single hit anywhere else, and an exact
//! tag hit outranks any single substring hit outside the title. Content
//! contributions are summed over every occurrence, so a document matched
//! very many times in a long body can still climb - that is deliberate.
//!
//! With current values: `100 > 40 > 10 > 5 >= 1` ✓

use crate::types::Document;
use crate::utils::{count_occurrences, fold_chars};

/// Weight per occurrence of the query in the title.
pub const TITLE_WEIGHT: f64 = 100.0;

/// Weight per tag whose whole label equals the query (case-insensitively).
pub const TAG_EXACT_WEIGHT: f64 = 40.0;

/// Weight per occurrence of the query in the description.
pub const DESCRIPTION_WEIGHT: f64 = 10.0;

/// Weight per tag that merely contains the query as a substring.
pub const TAG_PARTIAL_WEIGHT: f64 = 5.0;

/// Weight per occurrence of the query in the content body.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// The searchable fields of one document, as the scorer sees them.
///
/// `name` carries the document title; absent optional fields arrive as empty
/// strings and contribute nothing. Borrowing a view instead of taking the
/// whole `Document` keeps the scorer testable without building full records.
#[derive(Debug, Clone, Copy)]
pub struct ScorableFields<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub content: &'a str,
    pub tags: &'a [String],
}

impl<'a> From<&'a Document> for ScorableFields<'a> {
    fn from(document: &'a Document) -> Self {
        ScorableFields {
            name: &document.title,
            description: document.description_text(),
            content: document.content_text(),
            tags: &document.tags,
        }
    }
}

/// Compute the relevance of one document's fields against a query.
///
/// Each field contributes independently and the contributions are summed:
/// occurrence counts (overlapping included) times the per-field weight, plus
/// exact/partial tag hits. Case-insensitive throughout, consistent with the
/// matcher. Total and deterministic: empty fields score zero, a query with
/// no occurrences anywhere scores zero, and identical inputs always produce
/// the identical score.
///
/// Note that tag hits raise the score but produce no match contexts, so a
/// tag-only hit never makes a document appear in search results - the
/// service gates presence on contexts, not on score.
pub fn calculate_relevance(fields: &ScorableFields<'_>, query: &str) -> f64 {
    let query = fold_chars(query.trim());
    if query.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    score += count_occurrences(&fold_chars(fields.name), &query) as f64 * TITLE_WEIGHT;

    for tag in fields.tags {
        let tag = fold_chars(tag);
        if tag == query {
            score += TAG_EXACT_WEIGHT;
        } else if tag.contains(&query) {
            score += TAG_PARTIAL_WEIGHT;
        }
    }

    score += count_occurrences(&fold_chars(fields.description), &query) as f64 * DESCRIPTION_WEIGHT;
    score += count_occurrences(&fold_chars(fields.content), &query) as f64 * CONTENT_WEIGHT;

    score
}
