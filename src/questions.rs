//! Question-bank selection helpers.
//!
//! Mirrors the browse flow of the dashboards: pick a verb and a taxonomy
//! level, collect the question ids recorded for that pair, then pull the
//! matching bank entries for display.

use std::collections::HashSet;

use tracing::debug;

use crate::data::{FrequencyRecord, QuestionRecord};
use crate::types::QuestionId;

/// Question ids recorded for a `(keyword, category)` pair.
///
/// Ids from every matching record are concatenated in record order.
/// Duplicates are preserved: a question counted under several observations
/// keeps each entry, matching how the source data tallies frequencies.
pub fn ids_for(records: &[FrequencyRecord], keyword: &str, category: &str) -> Vec<QuestionId> {
    records
        .iter()
        .filter(|record| record.keyword == keyword && record.category == category)
        .flat_map(|record| record.question_ids.iter().copied())
        .collect()
}

/// Bank entries whose id appears in `ids`, in bank order.
///
/// Each bank entry is emitted at most once even when `ids` repeats it.
pub fn select_by_ids<'a>(
    bank: &'a [QuestionRecord],
    ids: &[QuestionId],
) -> Vec<&'a QuestionRecord> {
    let wanted: HashSet<QuestionId> = ids.iter().copied().collect();
    let selected: Vec<&QuestionRecord> = bank
        .iter()
        .filter(|question| wanted.contains(&question.id))
        .collect();
    debug!(
        requested = ids.len(),
        selected = selected.len(),
        "selected questions by id"
    );
    selected
}

/// Bank entries whose text contains `needle`, in bank order.
///
/// Matching is a plain case-sensitive substring test, the behavior of the
/// original free-text browse box. An empty needle selects nothing.
pub fn select_containing<'a>(bank: &'a [QuestionRecord], needle: &str) -> Vec<&'a QuestionRecord> {
    if needle.is_empty() {
        return Vec::new();
    }
    bank.iter()
        .filter(|question| question.text.contains(needle))
        .collect()
}
