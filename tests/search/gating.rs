//! Field gating: only enabled fields can grant presence in results.

use super::common::{make_document_full, make_document_with_content, make_document_with_tags};
use docmatch::{calculate_relevance, Field, ScorableFields, SearchOptions, SearchService};

#[test]
fn content_only_match_is_dropped_when_content_disabled() {
    let doc = make_document_with_content("1", "Unrelated title", "the needle is in here");
    let service = SearchService::new(vec![doc.clone()]);

    let options = SearchOptions {
        include_content: false,
        ..SearchOptions::default()
    };

    // The scorer still sees the content hit; the gate is on matches.
    assert!(calculate_relevance(&ScorableFields::from(&doc), "needle") > 0.0);
    assert!(service.search("needle", &options).is_empty());
}

#[test]
fn metadata_only_match_is_dropped_when_metadata_disabled() {
    let service = SearchService::new(vec![make_document_full(
        "1",
        "Needle in the title",
        "and the needle again",
        "plain body text",
        &[],
    )]);

    let options = SearchOptions {
        include_metadata: false,
        ..SearchOptions::default()
    };
    assert!(service.search("needle", &options).is_empty());
}

#[test]
fn disabled_fields_never_appear_in_matches() {
    let service = SearchService::new(vec![make_document_full(
        "1",
        "needle title",
        "needle description",
        "needle content",
        &[],
    )]);

    let no_content = SearchOptions {
        include_content: false,
        ..SearchOptions::default()
    };
    let results = service.search("needle", &no_content);
    let fields: Vec<Field> = results[0].matches.iter().map(|m| m.field).collect();
    assert_eq!(fields, vec![Field::Title, Field::Description]);

    let no_metadata = SearchOptions {
        include_metadata: false,
        ..SearchOptions::default()
    };
    let results = service.search("needle", &no_metadata);
    let fields: Vec<Field> = results[0].matches.iter().map(|m| m.field).collect();
    assert_eq!(fields, vec![Field::Content]);
}

#[test]
fn tag_only_match_scores_but_is_never_returned() {
    // Tags contribute relevance but produce no contexts, so a document
    // matching only in its tags stays out of the result list.
    let doc = make_document_with_tags("1", "Statistics Primer", &["probability"]);
    let service = SearchService::new(vec![doc.clone()]);

    assert!(calculate_relevance(&ScorableFields::from(&doc), "probability") > 0.0);
    assert!(service
        .search("probability", &SearchOptions::default())
        .is_empty());
}

#[test]
fn all_fields_disabled_returns_nothing() {
    let service = SearchService::new(vec![make_document_full(
        "1",
        "needle",
        "needle",
        "needle",
        &["needle"],
    )]);

    let options = SearchOptions {
        include_content: false,
        include_metadata: false,
        ..SearchOptions::default()
    };
    assert!(service.search("needle", &options).is_empty());
}
