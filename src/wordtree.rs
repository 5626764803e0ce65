//! Keyword context trees.
//!
//! Builds the word-tree visualization data: for every whole-word occurrence
//! of a keyword, the token sequences flowing into and out of it are merged
//! into two branching tries with per-node traversal counts. The renderer
//! draws them as converging/diverging branches around the keyword.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::wordtree::MAX_CONTEXT_DEPTH;
use crate::types::{Keyword, Term};
use crate::utils::{fold_case, word_spans};

/// Node in a context branch: a word, how many occurrences passed through it,
/// and the continuations beyond it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextNode {
    /// Lowercased word at this position.
    pub word: Term,
    /// Number of keyword occurrences whose context passes through this node.
    pub count: u64,
    /// Continuations, ordered by count descending then word ascending.
    pub children: Vec<ContextNode>,
}

/// Context tree for one keyword over a passage corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTree {
    /// The anchoring keyword, lowercased.
    pub keyword: Keyword,
    /// Total whole-word occurrences found across all passages.
    pub occurrences: u64,
    /// Branches of words preceding the keyword, nearest word first.
    pub before: Vec<ContextNode>,
    /// Branches of words following the keyword, nearest word first.
    pub after: Vec<ContextNode>,
}

impl WordTree {
    /// True when the keyword never occurred.
    pub fn is_empty(&self) -> bool {
        self.occurrences == 0
    }
}

#[derive(Default)]
struct BranchBuilder {
    count: u64,
    children: BTreeMap<Term, BranchBuilder>,
}

impl BranchBuilder {
    fn insert(&mut self, words: &[Term]) {
        let mut node = self;
        for word in words.iter().take(MAX_CONTEXT_DEPTH) {
            node = node.children.entry(word.clone()).or_default();
            node.count += 1;
        }
    }

    fn finish(self) -> Vec<ContextNode> {
        let mut nodes: Vec<ContextNode> = self
            .children
            .into_iter()
            .map(|(word, builder)| {
                let count = builder.count;
                ContextNode {
                    word,
                    count,
                    children: builder.finish(),
                }
            })
            .collect();
        nodes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        nodes
    }
}

/// Build a [`WordTree`] for `keyword` over `passages`.
///
/// Occurrences are whole-word and case-insensitive; context words are
/// lowercased so branches merge regardless of surface casing. Branch depth
/// is capped at [`MAX_CONTEXT_DEPTH`] words per side.
pub fn build_word_tree<T: AsRef<str>>(passages: &[T], keyword: &str) -> WordTree {
    let folded_keyword = fold_case(keyword);
    let mut occurrences = 0u64;
    let mut before = BranchBuilder::default();
    let mut after = BranchBuilder::default();

    for passage in passages {
        let text = passage.as_ref();
        let spans = word_spans(text);
        let words: Vec<Term> = spans
            .iter()
            .map(|span| fold_case(&text[span.start..span.end]))
            .collect();
        for (idx, word) in words.iter().enumerate() {
            if *word != folded_keyword {
                continue;
            }
            occurrences += 1;
            // Nearest-first on both sides, so shared near-context merges.
            let preceding: Vec<Term> = words[..idx].iter().rev().cloned().collect();
            before.insert(&preceding);
            after.insert(&words[idx + 1..]);
        }
    }

    debug!(
        keyword = folded_keyword.as_str(),
        occurrences, "built word tree"
    );

    WordTree {
        keyword: folded_keyword,
        occurrences,
        before: before.finish(),
        after: after.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "Deve analisar o texto base.",
            "Deve analisar o argumento central.",
            "Pode analisar um exemplo.",
        ]
    }

    #[test]
    fn occurrences_are_counted_across_passages() {
        let tree = build_word_tree(&corpus(), "analisar");
        assert_eq!(tree.occurrences, 3);
        assert!(!tree.is_empty());
    }

    #[test]
    fn shared_context_merges_and_orders_by_count() {
        let tree = build_word_tree(&corpus(), "analisar");
        // After the keyword: "o" twice, "um" once.
        assert_eq!(tree.after[0].word, "o");
        assert_eq!(tree.after[0].count, 2);
        assert_eq!(tree.after[1].word, "um");
        assert_eq!(tree.after[1].count, 1);
        // Beneath "o" the branches diverge.
        let continuations: Vec<&str> = tree.after[0]
            .children
            .iter()
            .map(|node| node.word.as_str())
            .collect();
        assert_eq!(continuations, vec!["argumento", "texto"]);
    }

    #[test]
    fn before_branch_is_nearest_word_first() {
        let tree = build_word_tree(&corpus(), "analisar");
        // "deve" (twice) outranks "pode" (once) directly before the keyword.
        assert_eq!(tree.before[0].word, "deve");
        assert_eq!(tree.before[0].count, 2);
    }

    #[test]
    fn matching_is_case_insensitive_whole_word() {
        let tree = build_word_tree(&["ANALISAR tudo.", "reanalisar nada."], "analisar");
        assert_eq!(tree.occurrences, 1);
        assert_eq!(tree.after[0].word, "tudo");
    }

    #[test]
    fn absent_keyword_yields_empty_tree() {
        let tree = build_word_tree(&corpus(), "criar");
        assert!(tree.is_empty());
        assert!(tree.before.is_empty());
        assert!(tree.after.is_empty());
    }

    #[test]
    fn branch_depth_is_capped() {
        let long = "analisar a b c d e f g h i j";
        let tree = build_word_tree(&[long], "analisar");
        let mut depth = 0;
        let mut nodes = &tree.after;
        while let Some(node) = nodes.first() {
            depth += 1;
            nodes = &node.children;
        }
        assert_eq!(depth, MAX_CONTEXT_DEPTH);
    }
}
