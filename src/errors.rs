use thiserror::Error;

use crate::types::{CategoryLabel, Keyword};

/// Error type for malformed records and invalid build configuration.
///
/// Empty results (no surviving keywords, no highlight spans, no selected
/// questions) are never errors; they come back as empty collections.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid record for keyword '{keyword}' in category '{category}': {reason}")]
    InvalidRecord {
        category: CategoryLabel,
        keyword: Keyword,
        reason: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
}
