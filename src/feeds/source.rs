//! Feed sources

use super::models::Feed;
use crate::error::{Result, SearchError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies the ordered list of feeds for a search run
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve every feed to search. Failure aborts the whole run.
    async fn retrieve_feeds(&self) -> Result<Vec<Feed>>;
}

/// Reads feeds from a JSON array file
pub struct JsonFeedSource {
    path: PathBuf,
}

impl JsonFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON feed list
    pub fn parse(content: &str) -> Result<Vec<Feed>> {
        serde_json::from_str(content).map_err(|e| SearchError::FeedRetrieval(e.to_string()))
    }
}

#[async_trait]
impl FeedSource for JsonFeedSource {
    async fn retrieve_feeds(&self) -> Result<Vec<Feed>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SearchError::FeedRetrieval(format!("{}: {}", self.path.display(), e))
        })?;

        let feeds = Self::parse(&content)?;
        debug!("Read {} feeds from {}", feeds.len(), self.path.display());
        Ok(feeds)
    }
}

/// In-memory feed list
#[derive(Debug, Clone, Default)]
pub struct StaticFeedSource {
    feeds: Vec<Feed>,
}

impl StaticFeedSource {
    pub fn new(feeds: Vec<Feed>) -> Self {
        Self { feeds }
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn retrieve_feeds(&self) -> Result<Vec<Feed>> {
        Ok(self.feeds.clone())
    }
}
