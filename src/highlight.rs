//! Verb occurrence highlighting.
//!
//! Locates whole-word occurrences of a selected verb inside passage text and
//! returns byte-offset spans, leaving markup to the presentation layer. Three
//! strategies are offered: exact word match, a cheap prefix heuristic for
//! inflections, and matching against an externally lemmatized set of surface
//! forms.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::highlight::DEFAULT_PREFIX_LEN;
use crate::data::{HighlightResult, Span};
use crate::utils::{fold_case, fold_with_offsets, word_spans};

/// Strategy used to locate occurrences of a target verb.
///
/// All modes are case-insensitive and match whole words only; a target never
/// matches inside a longer word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightMode {
    /// Match the target exactly, as a whole word.
    LiteralWord,
    /// Match any word whose first `len` characters equal the target's.
    ///
    /// A heuristic stand-in for morphological analysis: `identific` with the
    /// default length catches `identificou` and `identificando`. Targets
    /// shorter than `len` are matched in full.
    Prefix {
        /// Number of leading characters compared.
        len: usize,
    },
    /// Match any whole-word occurrence of a caller-supplied surface form.
    ///
    /// Forms come from an external lemmatizer and may contain internal
    /// non-word characters (hyphenated verbs), so candidate matches can
    /// overlap; the earliest-starting, longest candidate wins.
    LemmaSet(BTreeSet<String>),
}

impl Default for HighlightMode {
    fn default() -> Self {
        Self::Prefix {
            len: DEFAULT_PREFIX_LEN,
        }
    }
}

/// Highlight `target` in every passage.
///
/// One [`HighlightResult`] per passage, in input order. Passages without a
/// match (including empty or whitespace-only text) come back with no spans;
/// that is a normal outcome, not an error.
pub fn highlight<T: AsRef<str>>(
    passages: &[T],
    target: &str,
    mode: &HighlightMode,
) -> Vec<HighlightResult> {
    let results: Vec<HighlightResult> = passages
        .iter()
        .map(|passage| highlight_passage(passage.as_ref(), target, mode))
        .collect();
    debug!(
        passages = results.len(),
        matched = results.iter().filter(|result| !result.is_empty()).count(),
        target,
        "highlighted passages"
    );
    results
}

/// Highlight `target` in a single passage.
pub fn highlight_passage(passage: &str, target: &str, mode: &HighlightMode) -> HighlightResult {
    let spans = match mode {
        HighlightMode::LiteralWord => {
            let folded_target = fold_case(target);
            matching_words(passage, |word| word == folded_target)
        }
        HighlightMode::Prefix { len } => {
            let folded_prefix: String = fold_case(target).chars().take(*len).collect();
            if folded_prefix.is_empty() {
                Vec::new()
            } else {
                matching_words(passage, |word| word.starts_with(&folded_prefix))
            }
        }
        HighlightMode::LemmaSet(forms) => lemma_spans(passage, forms),
    };
    HighlightResult {
        text: passage.to_string(),
        spans,
    }
}

fn matching_words(passage: &str, matches: impl Fn(&str) -> bool) -> Vec<Span> {
    word_spans(passage)
        .into_iter()
        .filter(|span| {
            let word = fold_case(&passage[span.start..span.end]);
            matches(&word)
        })
        .collect()
}

fn lemma_spans(passage: &str, forms: &BTreeSet<String>) -> Vec<Span> {
    let (folded, offsets) = fold_with_offsets(passage);
    let mut candidates: Vec<Span> = Vec::new();
    for form in forms {
        let folded_form = fold_case(form);
        if folded_form.is_empty() {
            continue;
        }
        for (start, _) in folded.match_indices(&folded_form) {
            let end = start + folded_form.len();
            if !bounded_by_word_edges(&folded, start, end) {
                continue;
            }
            candidates.push(Span {
                start: offsets[start],
                end: offsets[end],
            });
        }
    }
    resolve_overlaps(candidates)
}

/// True when the folded range is not embedded in a longer word.
fn bounded_by_word_edges(folded: &str, start: usize, end: usize) -> bool {
    let open = folded[..start]
        .chars()
        .next_back()
        .is_none_or(|ch| !ch.is_alphanumeric());
    let close = folded[end..]
        .chars()
        .next()
        .is_none_or(|ch| !ch.is_alphanumeric());
    open && close
}

/// Keep the earliest-starting, longest candidate wherever candidates overlap.
fn resolve_overlaps(mut candidates: Vec<Span>) -> Vec<Span> {
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    candidates.dedup();
    let mut resolved: Vec<Span> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match resolved.last() {
            Some(last) if candidate.start < last.end => {}
            _ => resolved.push(candidate),
        }
    }
    resolved
}
