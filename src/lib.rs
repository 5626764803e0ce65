#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Defaults, taxonomy ordering, and the bundled stopword list.
pub mod constants;
/// Frequency/question record types and highlight results.
pub mod data;
mod errors;
/// Verb occurrence highlighting.
pub mod highlight;
/// Dense category-by-keyword matrix building.
pub mod matrix;
/// Question-bank selection helpers.
pub mod questions;
/// Stopword-filtered term-frequency summaries.
pub mod terms;
/// Shared type aliases.
pub mod types;
/// Word segmentation and case-folding helpers.
pub mod utils;
/// Keyword context trees.
pub mod wordtree;

pub use data::{FrequencyRecord, HighlightResult, QuestionRecord, Span};
pub use errors::AnalyticsError;
pub use highlight::{highlight, highlight_passage, HighlightMode};
pub use matrix::{build_matrix, FrequencyMatrix, MatrixSpec};
pub use terms::{portuguese_stopwords, term_frequencies, TermCount};
pub use types::{CategoryLabel, Keyword, Passage, QuestionId, Term};
pub use wordtree::{build_word_tree, ContextNode, WordTree};
