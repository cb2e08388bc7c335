//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a title-only test document.
pub fn make_document(id: &str, title: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        content: None,
        tags: Vec::new(),
    }
}

/// Create a test document with content.
pub fn make_document_with_content(id: &str, title: &str, content: &str) -> Document {
    Document {
        content: Some(content.to_string()),
        ..make_document(id, title)
    }
}

/// Create a test document with tags.
pub fn make_document_with_tags(id: &str, title: &str, tags: &[&str]) -> Document {
    Document {
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        ..make_document(id, title)
    }
}

/// Create a test document with every field populated.
pub fn make_document_full(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    tags: &[&str],
) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        content: Some(content.to_string()),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}
