//! Identical calls on an unmodified collection produce identical output.

use super::common::catalog_service;
use docmatch::SearchOptions;

#[test]
fn repeated_searches_return_identical_results() {
    let service = catalog_service();

    let first = service.search("derivative", &SearchOptions::default());
    let second = service.search("derivative", &SearchOptions::default());

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.document.id, b.document.id);
        assert_eq!(a.relevance, b.relevance);
        assert_eq!(a.matches, b.matches);
    }
}

#[test]
fn searches_are_independent_of_each_other() {
    let service = catalog_service();

    let vector_before = service.search("vector", &SearchOptions::default());
    let _ = service.search("derivative", &SearchOptions::default());
    let vector_after = service.search("vector", &SearchOptions::default());

    assert_eq!(vector_before.len(), vector_after.len());
    for (a, b) in vector_before.iter().zip(vector_after.iter()) {
        assert_eq!(a.document.id, b.document.id);
        assert_eq!(a.relevance, b.relevance);
    }
}
