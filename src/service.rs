//! The search service: the one stateful piece of the engine.
//!
//! Owns the current document collection and orchestrates scoring, matching,
//! filtering and ordering for each query. The collection is held as an
//! immutable snapshot behind a lock; [`SearchService::search`] pins one
//! snapshot at entry and [`SearchService::update_documents`] publishes a
//! whole new one, so an in-flight search always sees either the old or the
//! new collection in full, never a mix.

use crate::matcher::find_matches_with_context;
use crate::scoring::{calculate_relevance, ScorableFields};
use crate::types::{Document, Field, FieldMatch, SearchOptions, SearchResult};
use parking_lot::RwLock;
use std::sync::Arc;

type Snapshot = Arc<Vec<Arc<Document>>>;

fn snapshot_from(documents: Vec<Document>) -> Snapshot {
    Arc::new(documents.into_iter().map(Arc::new).collect())
}

/// In-memory relevance search over a swappable document collection.
///
/// Instantiated once per session/context and passed by reference to
/// consumers; no singleton involved. `search` never mutates the collection
/// or any document.
pub struct SearchService {
    documents: RwLock<Snapshot>,
}

impl SearchService {
    /// Create a service seeded with an initial collection.
    pub fn new(documents: Vec<Document>) -> Self {
        SearchService {
            documents: RwLock::new(snapshot_from(documents)),
        }
    }

    /// Atomically replace the entire collection.
    ///
    /// Takes effect for all subsequent `search` calls; searches already in
    /// flight keep the snapshot they pinned at entry.
    pub fn update_documents(&self, documents: Vec<Document>) {
        *self.documents.write() = snapshot_from(documents);
    }

    /// Number of documents currently held.
    pub fn document_count(&self) -> usize {
        self.documents.read().len()
    }

    /// Rank the current collection against a free-text query.
    ///
    /// A whitespace-only query is a no-op and returns no results. Otherwise
    /// every document is scored, fields enabled by `options` are checked for
    /// match contexts, documents without any context are dropped (a tag-only
    /// hit scores but never gates presence), survivors are stably sorted by
    /// relevance descending - equal scores keep collection order - and the
    /// list is cut to `options.limit`.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        // Pin one snapshot for the whole call.
        let snapshot: Snapshot = Arc::clone(&self.documents.read());

        let mut results: Vec<SearchResult> = Vec::new();
        for document in snapshot.iter() {
            let relevance = calculate_relevance(&ScorableFields::from(document.as_ref()), query);

            let mut matches: Vec<FieldMatch> = Vec::new();
            if options.include_metadata {
                collect_field(&mut matches, Field::Title, &document.title, query);
                collect_field(
                    &mut matches,
                    Field::Description,
                    document.description_text(),
                    query,
                );
            }
            if options.include_content {
                collect_field(&mut matches, Field::Content, document.content_text(), query);
            }

            // Presence is gated on contexts, not on score.
            if matches.is_empty() {
                continue;
            }

            results.push(SearchResult {
                document: Arc::clone(document),
                relevance,
                matches,
            });
        }

        // sort_by is stable, so ties preserve collection order.
        results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        results.truncate(options.limit);
        results
    }
}

fn collect_field(matches: &mut Vec<FieldMatch>, field: Field, text: &str, query: &str) {
    let contexts: Vec<String> = find_matches_with_context(text, query).collect();
    if !contexts.is_empty() {
        matches.push(FieldMatch { field, contexts });
    }
}
