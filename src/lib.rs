//! In-memory relevance search with contextual match snippets.
//!
//! A local ranking layer over an already-fetched document set: score each
//! document against a free-text query, pull bounded context snippets around
//! every match, drop the non-matches, and hand back a ranked, size-limited
//! result list. Built for bounded collections (tens to low hundreds of
//! documents) that a hosting application keeps in memory next to its UI -
//! not a replacement for a server-side search index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  matcher.rs  │     │  scoring.rs  │
//! │ (Document,  │     │ (contexts    │     │ (relevance   │
//! │SearchResult)│     │  per field)  │     │  per doc)    │
//! └─────────────┘     └──────┬───────┘     └──────┬───────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │           service.rs            │
//!                     │ (SearchService: snapshot, scan, │
//!                     │  gate on matches, sort, limit)  │
//!                     └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docmatch::{Document, SearchOptions, SearchService};
//!
//! let docs = vec![Document {
//!     id: "1".into(),
//!     title: "Linear Algebra Notes".into(),
//!     description: Some("Vector spaces and matrices".into()),
//!     content: Some("A vector space over a field...".into()),
//!     tags: vec!["math".into()],
//! }];
//!
//! let service = SearchService::new(docs);
//! let results = service.search("vector", &SearchOptions::default());
//! assert_eq!(results[0].document.id, "1");
//! ```

// Module declarations
mod matcher;
mod scoring;
mod service;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use matcher::{
    find_matches_with_context, MatchContexts, CONTEXT_WINDOW, MAX_CONTEXTS_PER_FIELD,
};
pub use scoring::{
    calculate_relevance, ScorableFields, CONTENT_WEIGHT, DESCRIPTION_WEIGHT, TAG_EXACT_WEIGHT,
    TAG_PARTIAL_WEIGHT, TITLE_WEIGHT,
};
pub use service::SearchService;
pub use types::{Document, Field, FieldMatch, SearchOptions, SearchResult};
