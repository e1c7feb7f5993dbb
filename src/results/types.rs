//! Result type definitions

use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single match produced by a matcher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Name of the feed that produced the match
    pub feed: String,
    /// Field the term matched in (e.g. "Title")
    pub field: String,
    /// Matched content
    pub content: String,
}

impl SearchResult {
    pub fn new(
        feed: impl Into<String>,
        field: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            feed: feed.into(),
            field: field.into(),
            content: content.into(),
        }
    }
}

/// A feed whose worker failed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedFailure {
    pub feed: String,
    pub error: String,
}

impl FeedFailure {
    pub fn new(feed: impl Into<String>, error: &MatchError) -> Self {
        Self {
            feed: feed.into(),
            error: error.to_string(),
        }
    }
}

/// Summary of a completed search run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchReport {
    /// The search term
    pub term: String,
    /// Number of feeds a worker was launched for
    pub feeds_searched: usize,
    /// Number of results the sink rendered
    pub results_displayed: usize,
    /// Feeds whose worker failed
    pub failures: Vec<FeedFailure>,
    /// Wall time of the run
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchReport {
    /// Whether every worker completed without error
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
