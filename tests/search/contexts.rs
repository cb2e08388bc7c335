//! Snippet extraction as seen through full search results.

use super::common::{make_document_full, make_document_with_content};
use docmatch::{Field, SearchOptions, SearchService, CONTEXT_WINDOW, MAX_CONTEXTS_PER_FIELD};

#[test]
fn content_match_round_trips_through_contexts() {
    let content = format!(
        "{} the needle sits right here {}",
        "intro text ".repeat(20),
        "closing text ".repeat(20)
    );
    let service = SearchService::new(vec![make_document_with_content(
        "1",
        "Unrelated",
        &content,
    )]);

    let results = service.search("needle", &SearchOptions::default());
    assert_eq!(results.len(), 1);

    let content_match = results[0]
        .matches
        .iter()
        .find(|m| m.field == Field::Content)
        .expect("content field should carry the match");
    assert!(!content_match.contexts.is_empty());

    for context in &content_match.contexts {
        assert!(context.contains("needle"));
        // Bounded: window either side plus the match plus ellipses.
        assert!(context.chars().count() <= 2 * CONTEXT_WINDOW + "needle".len() + 2);
    }
}

#[test]
fn snippets_keep_original_casing() {
    let service = SearchService::new(vec![make_document_with_content(
        "1",
        "Guide",
        "Searching PostgreSQL indexes efficiently",
    )]);

    let results = service.search("postgresql", &SearchOptions::default());
    let context = &results[0].matches[0].contexts[0];
    assert!(context.contains("PostgreSQL"));
}

#[test]
fn every_occurrence_up_to_cap_gets_a_snippet() {
    let content = "needle and needle and needle".to_string();
    let service = SearchService::new(vec![make_document_with_content("1", "X", &content)]);

    let results = service.search("needle", &SearchOptions::default());
    assert_eq!(results[0].matches[0].contexts.len(), 3);
}

#[test]
fn snippet_count_is_capped_per_field() {
    let content = "needle ".repeat(50);
    let service = SearchService::new(vec![make_document_with_content("1", "X", &content)]);

    let results = service.search("needle", &SearchOptions::default());
    assert_eq!(
        results[0].matches[0].contexts.len(),
        MAX_CONTEXTS_PER_FIELD
    );
}

#[test]
fn matching_fields_each_contribute_contexts() {
    let service = SearchService::new(vec![make_document_full(
        "1",
        "needle here",
        "needle there",
        "needle everywhere",
        &[],
    )]);

    let results = service.search("needle", &SearchOptions::default());
    assert_eq!(results[0].matches.len(), 3);
    for field_match in &results[0].matches {
        assert_eq!(field_match.contexts.len(), 1);
        assert!(field_match.contexts[0].contains("needle"));
    }
}
