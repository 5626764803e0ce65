use serde::{Deserialize, Serialize};

pub use crate::types::{CategoryLabel, Keyword, QuestionId};

/// Long-form frequency observation produced by the external data loader.
///
/// Multiple records may share a `(category, keyword)` pair; aggregation sums
/// their frequencies and concatenates their question ids. Question ids are
/// never deduplicated, so repeated observations keep their full weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRecord {
    /// Taxonomy level this observation belongs to.
    pub category: CategoryLabel,
    /// Verb being counted.
    pub keyword: Keyword,
    /// Occurrence count for this (category, keyword) observation.
    pub frequency: u64,
    /// Ids of the questions that contributed to `frequency`, in source order.
    pub question_ids: Vec<QuestionId>,
}

impl FrequencyRecord {
    /// Build a record from loader-normalized fields.
    pub fn new(
        category: impl Into<CategoryLabel>,
        keyword: impl Into<Keyword>,
        frequency: u64,
        question_ids: Vec<QuestionId>,
    ) -> Self {
        Self {
            category: category.into(),
            keyword: keyword.into(),
            frequency,
            question_ids,
        }
    }
}

/// Read-only question-bank entry supplied by the external data loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Unique question id.
    pub id: QuestionId,
    /// Taxonomy level the question was generated for.
    pub category: CategoryLabel,
    /// Question text.
    pub text: String,
}

/// Half-open byte range `[start, end)` marking a match within passage text.
///
/// Offsets index the passage's UTF-8 representation and always fall on
/// character boundaries, so `&text[span.start..span.end]` is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
}

impl Span {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Passage text plus the sorted, non-overlapping spans matching the target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResult {
    /// The passage the spans index into.
    pub text: String,
    /// Matched spans sorted by start offset; guaranteed non-overlapping.
    pub spans: Vec<Span>,
}

impl HighlightResult {
    /// True when the passage contained no match.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Matched slices of the passage, in order.
    pub fn matched(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().map(|span| &self.text[span.start..span.end])
    }
}
