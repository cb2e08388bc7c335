//! Substring matching with bounded context extraction.
//!
//! [`find_matches_with_context`] locates every occurrence of a query inside a
//! field's text and yields one human-readable snippet per occurrence: up to
//! [`CONTEXT_WINDOW`] characters either side of the match, with `…` marking
//! edges where the window was cut short.
//!
//! Matching is case-insensitive substring matching - no tokenization, no word
//! boundaries. Snippets are sliced from the *original* text, so casing is
//! preserved even though matching runs over a folded copy. A byte-offset map
//! built during folding translates match positions back.
//!
//! The returned [`MatchContexts`] iterator is lazy, finite, and restartable
//! via `Clone`; it is a pure function of its two inputs.

use crate::utils::{char_width_at, fold_chars};

/// Characters of surrounding text kept on each side of a match.
pub const CONTEXT_WINDOW: usize = 40;

/// Upper bound on contexts produced per field.
///
/// A query like "a" against a long `content` field can match thousands of
/// times; everything past the first few occurrences adds nothing a human
/// would read. Raising this only grows the snippets a consumer renders, it
/// does not change scoring or ranking.
pub const MAX_CONTEXTS_PER_FIELD: usize = 5;

const ELLIPSIS: char = '…';

/// Case-folded text plus a map from folded byte offsets back to original
/// byte offsets.
///
/// Lowercasing can change byte lengths ("İ" folds to two characters), so
/// positions found in the folded copy cannot index the original directly.
/// `byte_map[i]` is the byte offset of the original character that produced
/// folded byte `i`; mapped offsets are always character boundaries.
#[derive(Debug, Clone)]
struct FoldedText {
    folded: String,
    byte_map: Vec<usize>,
    original_len: usize,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut byte_map = Vec::with_capacity(text.len());
        for (orig_idx, ch) in text.char_indices() {
            for low in ch.to_lowercase() {
                let start = folded.len();
                folded.push(low);
                for _ in start..folded.len() {
                    byte_map.push(orig_idx);
                }
            }
        }
        FoldedText {
            folded,
            byte_map,
            original_len: text.len(),
        }
    }

    /// Original byte offset of the character that starts at folded offset
    /// `folded_idx`.
    fn original_start(&self, folded_idx: usize) -> usize {
        self.byte_map
            .get(folded_idx)
            .copied()
            .unwrap_or(self.original_len)
    }

    /// Original byte offset just past the last character a folded range
    /// ending at `folded_end` touches.
    ///
    /// When `folded_end` lands mid-way through a character's multi-character
    /// lowercase expansion, the end is rounded up past that character so the
    /// matched slice never splits a code point.
    fn original_end(&self, folded_end: usize) -> usize {
        if folded_end >= self.byte_map.len() {
            return self.original_len;
        }
        if folded_end == 0 {
            return 0;
        }
        let last_char = self.byte_map[folded_end - 1];
        if self.byte_map[folded_end] != last_char {
            return self.byte_map[folded_end];
        }
        // Round up past the partially covered character.
        let mut idx = folded_end;
        while idx < self.byte_map.len() && self.byte_map[idx] == last_char {
            idx += 1;
        }
        self.byte_map.get(idx).copied().unwrap_or(self.original_len)
    }
}

/// Lazy iterator over context snippets for one (text, query) pair.
///
/// Finite (capped at [`MAX_CONTEXTS_PER_FIELD`]) and restartable: cloning
/// yields a fresh iterator over the same matches.
#[derive(Debug, Clone)]
pub struct MatchContexts<'a> {
    text: &'a str,
    folded: FoldedText,
    query: String,
    pos: usize,
    yielded: usize,
}

impl<'a> MatchContexts<'a> {
    fn render(&self, folded_start: usize, folded_end: usize) -> String {
        let start = self.folded.original_start(folded_start);
        let end = self.folded.original_end(folded_end);

        let window_start = window_before(self.text, start, CONTEXT_WINDOW);
        let window_end = window_after(self.text, end, CONTEXT_WINDOW);

        let mut context = String::new();
        if window_start > 0 {
            context.push(ELLIPSIS);
        }
        context.push_str(&self.text[window_start..window_end]);
        if window_end < self.text.len() {
            context.push(ELLIPSIS);
        }
        context
    }
}

impl Iterator for MatchContexts<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.query.is_empty() || self.yielded >= MAX_CONTEXTS_PER_FIELD {
            return None;
        }
        let rel = self.folded.folded.get(self.pos..)?.find(&self.query)?;
        let start = self.pos + rel;
        let end = start + self.query.len();
        // Advance one character so overlapping occurrences each get a context.
        self.pos = start + char_width_at(&self.folded.folded, start);
        self.yielded += 1;
        Some(self.render(start, end))
    }
}

/// Find every occurrence of `query` in `text`, case-insensitively, and yield
/// one bounded context snippet per occurrence.
///
/// Empty text, an empty (post-fold) query, or no occurrences all produce an
/// iterator that yields nothing.
pub fn find_matches_with_context<'a>(text: &'a str, query: &str) -> MatchContexts<'a> {
    MatchContexts {
        text,
        folded: FoldedText::new(text),
        query: fold_chars(query),
        pos: 0,
        yielded: 0,
    }
}

/// Byte offset where a window of up to `window` characters before `end`
/// begins.
fn window_before(text: &str, end: usize, window: usize) -> usize {
    let mut idx = end;
    for (i, _) in text[..end].char_indices().rev().take(window) {
        idx = i;
    }
    idx
}

/// Byte offset just past a window of up to `window` characters after `start`.
fn window_after(text: &str, start: usize, window: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(i, _)| start + i)
}
