//! Dense category-by-keyword matrix building.
//!
//! Converts long-form `(category, keyword, frequency)` records into the
//! matrix behind the dashboard heatmaps. Row order is exactly the declared
//! taxonomy order; column order is driven by a reference category's row so
//! the most frequent verbs for that level come first.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::matrix::{BLOOM_LEVELS, DEFAULT_MIN_TOTAL_FREQUENCY};
use crate::data::FrequencyRecord;
use crate::errors::AnalyticsError;
use crate::types::{CategoryLabel, Keyword};

/// Controls row order, column order, and keyword filtering for [`build_matrix`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSpec {
    /// Row labels, in display order. Every label becomes a row even with no
    /// data; records under other categories are dropped.
    pub declared_categories: Vec<CategoryLabel>,
    /// Category whose row values rank the columns (descending, ties broken
    /// by ascending keyword). `None`, or a label absent from
    /// `declared_categories`, leaves columns in ascending keyword order.
    pub reference_category: Option<CategoryLabel>,
    /// Keywords whose all-category total is below this survive nothing; the
    /// default of 1 keeps every observed keyword.
    pub min_total_frequency: u64,
    /// Optional allow-list applied before the frequency filter.
    pub included_keywords: Option<BTreeSet<Keyword>>,
}

impl Default for MatrixSpec {
    fn default() -> Self {
        Self {
            declared_categories: BLOOM_LEVELS.iter().map(|level| level.to_string()).collect(),
            reference_category: None,
            min_total_frequency: DEFAULT_MIN_TOTAL_FREQUENCY,
            included_keywords: None,
        }
    }
}

/// Dense category-by-keyword frequency table.
///
/// Rows follow the declared category order, columns the order chosen by the
/// builder. Cells default to 0 for pairs absent from the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyMatrix {
    categories: Vec<CategoryLabel>,
    columns: IndexMap<Keyword, usize>,
    values: Vec<Vec<u64>>,
}

impl FrequencyMatrix {
    /// Row labels in display order.
    pub fn categories(&self) -> &[CategoryLabel] {
        &self.categories
    }

    /// Column labels in display order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when no keyword survived filtering.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cell value for `(category, keyword)`, or `None` when either label is
    /// not part of the matrix.
    pub fn value(&self, category: &str, keyword: &str) -> Option<u64> {
        let row = self.categories.iter().position(|label| label == category)?;
        let column = *self.columns.get(keyword)?;
        Some(self.values[row][column])
    }

    /// Cells of one category row, aligned with [`Self::keywords`].
    pub fn row(&self, category: &str) -> Option<&[u64]> {
        let row = self.categories.iter().position(|label| label == category)?;
        Some(&self.values[row])
    }

    /// Sum of one keyword's column across all rows.
    pub fn keyword_total(&self, keyword: &str) -> Option<u64> {
        let column = *self.columns.get(keyword)?;
        Some(self.values.iter().map(|row| row[column]).sum())
    }

    /// Sum of one category's row across all columns.
    pub fn category_total(&self, category: &str) -> Option<u64> {
        self.row(category).map(|row| row.iter().sum())
    }
}

/// Build a [`FrequencyMatrix`] from long-form records.
///
/// Steps, in order:
/// 1. Validate records (labels must be non-blank) and aggregate duplicate
///    `(category, keyword)` pairs by summing frequencies.
/// 2. Intersect keywords with the allow-list, then drop keywords whose
///    all-category total is below `min_total_frequency`. Totals are computed
///    over every input category, declared or not, matching how the source
///    dashboards filter before pivoting.
/// 3. Emit exactly the declared categories as rows, zero-filling missing
///    ones and dropping undeclared ones.
/// 4. Order columns by the reference category's row (descending, ties by
///    ascending keyword), or ascending by keyword when no reference row
///    exists.
///
/// An empty keyword set after filtering is a valid zero-column matrix, not
/// an error. Identical inputs always produce identical output.
pub fn build_matrix(
    records: &[FrequencyRecord],
    spec: &MatrixSpec,
) -> Result<FrequencyMatrix, AnalyticsError> {
    if spec.declared_categories.is_empty() {
        return Err(AnalyticsError::Configuration(
            "declared_categories must name at least one category".to_string(),
        ));
    }

    let mut cells: HashMap<(&str, &str), u64> = HashMap::new();
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in records {
        if record.category.trim().is_empty() || record.keyword.trim().is_empty() {
            return Err(AnalyticsError::InvalidRecord {
                category: record.category.clone(),
                keyword: record.keyword.clone(),
                reason: "category and keyword labels must be non-blank".to_string(),
            });
        }
        *cells
            .entry((record.category.as_str(), record.keyword.as_str()))
            .or_default() += record.frequency;
        *totals.entry(record.keyword.as_str()).or_default() += record.frequency;
    }

    // Allow-list first, then the frequency floor on what remains.
    let mut keywords: Vec<&str> = totals
        .iter()
        .map(|(keyword, total)| (*keyword, *total))
        .filter(|(keyword, _)| match &spec.included_keywords {
            Some(included) => included.contains(*keyword),
            None => true,
        })
        .filter(|(_, total)| *total >= spec.min_total_frequency)
        .map(|(keyword, _)| keyword)
        .collect();
    keywords.sort_unstable();

    let reference_row = spec
        .reference_category
        .as_deref()
        .filter(|reference| {
            spec.declared_categories
                .iter()
                .any(|label| label == reference)
        });
    if let Some(reference) = reference_row {
        keywords.sort_by(|a, b| {
            let value_a = cells.get(&(reference, *a)).copied().unwrap_or(0);
            let value_b = cells.get(&(reference, *b)).copied().unwrap_or(0);
            value_b.cmp(&value_a).then_with(|| a.cmp(b))
        });
    }

    let columns: IndexMap<Keyword, usize> = keywords
        .iter()
        .enumerate()
        .map(|(idx, keyword)| (keyword.to_string(), idx))
        .collect();
    let values: Vec<Vec<u64>> = spec
        .declared_categories
        .iter()
        .map(|category| {
            keywords
                .iter()
                .map(|keyword| {
                    cells
                        .get(&(category.as_str(), *keyword))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();

    debug!(
        rows = spec.declared_categories.len(),
        columns = columns.len(),
        reference = reference_row.unwrap_or("<none>"),
        "built frequency matrix"
    );

    Ok(FrequencyMatrix {
        categories: spec.declared_categories.clone(),
        columns,
        values,
    })
}
