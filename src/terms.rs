//! Stopword-filtered term-frequency summaries.
//!
//! Produces the counts behind the per-category word clouds: lowercase
//! tokenization over a passage corpus, function words removed, remaining
//! terms counted and ranked deterministically.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::constants::terms::PORTUGUESE_STOPWORDS;
use crate::types::Term;
use crate::utils::{fold_case, word_spans};

/// One row of a term-frequency summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    /// Lowercased term.
    pub term: Term,
    /// Total occurrences across all passages.
    pub count: u64,
}

/// The bundled Portuguese stopword set.
pub fn portuguese_stopwords() -> HashSet<String> {
    PORTUGUESE_STOPWORDS
        .iter()
        .map(|word| word.to_string())
        .collect()
}

/// Count non-stopword terms across `passages`.
///
/// Tokens are lowercased before the stopword test, so the set should hold
/// lowercase entries. Results are sorted by count descending, ties by
/// ascending term, making the ranking reproducible.
pub fn term_frequencies<T: AsRef<str>>(
    passages: &[T],
    stopwords: &HashSet<String>,
) -> Vec<TermCount> {
    let mut counts: HashMap<Term, u64> = HashMap::new();
    for passage in passages {
        let text = passage.as_ref();
        for span in word_spans(text) {
            let term = fold_case(&text[span.start..span.end]);
            if stopwords.contains(&term) {
                continue;
            }
            *counts.entry(term).or_default() += 1;
        }
    }
    let mut rows: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    rows
}
