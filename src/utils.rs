//! String helpers shared by the matcher and the scorer.

/// Case-fold a string for matching: per-character Unicode lowercasing.
///
/// Folding is per-character on purpose - the matcher folds text character by
/// character while building its offset map, and the query must go through the
/// identical transformation or the two sides can disagree on context-sensitive
/// mappings (Greek final sigma being the classic one).
///
/// No diacritic stripping: "Toán" and "Toan" are different strings and must
/// not match each other.
pub(crate) fn fold_chars(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Count every occurrence of `needle` in `haystack`, overlapping included.
///
/// The scan advances one character past each match start, so `"aa"` occurs
/// twice in `"aaa"`. Both inputs are expected to be already case-folded.
/// An empty needle yields zero.
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(needle) {
        count += 1;
        let start = pos + found;
        pos = start + char_width_at(haystack, start);
    }
    count
}

/// Byte width of the character starting at `byte_idx`.
pub(crate) fn char_width_at(text: &str, byte_idx: usize) -> usize {
    text[byte_idx..].chars().next().map_or(1, char::len_utf8)
}
