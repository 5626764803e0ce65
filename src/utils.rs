//! Word segmentation and case-folding helpers shared by the text components.

use crate::data::Span;

/// Byte ranges of the maximal alphanumeric runs in `text`.
///
/// A word is a maximal run of Unicode alphanumeric characters, so accented
/// Portuguese verbs (`avaliará`) stay whole while punctuation and whitespace
/// act as boundaries.
pub fn word_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            start.get_or_insert(idx);
        } else if let Some(word_start) = start.take() {
            spans.push(Span {
                start: word_start,
                end: idx,
            });
        }
    }
    if let Some(word_start) = start {
        spans.push(Span {
            start: word_start,
            end: text.len(),
        });
    }
    spans
}

/// Lowercase `text` with full Unicode case folding.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercase `text` and map every folded byte offset back to the original.
///
/// Returns the folded string plus an offset table with `folded.len() + 1`
/// entries: entry `i` is the original byte offset of the character that
/// produced folded byte `i`, and the final entry is `text.len()`. Folding a
/// single character may expand to several, so the table is how highlight
/// spans found in folded text are translated back to original offsets.
pub(crate) fn fold_with_offsets(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::new();
    let mut offsets = Vec::with_capacity(text.len() + 1);
    for (idx, ch) in text.char_indices() {
        for lowered in ch.to_lowercase() {
            let before = folded.len();
            folded.push(lowered);
            for _ in before..folded.len() {
                offsets.push(idx);
            }
        }
    }
    offsets.push(text.len());
    (folded, offsets)
}
