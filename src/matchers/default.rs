//! Fallback matcher for feed types without a dedicated matcher

use super::traits::Matcher;
use crate::error::MatchError;
use crate::feeds::Feed;
use crate::results::ResultSender;
use async_trait::async_trait;
use tracing::debug;

/// Matches nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMatcher;

impl DefaultMatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Matcher for DefaultMatcher {
    fn name(&self) -> &str {
        "default"
    }

    async fn search(
        &self,
        feed: &Feed,
        _term: &str,
        _results: &ResultSender,
    ) -> Result<(), MatchError> {
        debug!("No matcher for feed type '{}', skipping {}", feed.feed_type, feed.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::result_channel;

    #[tokio::test]
    async fn test_default_produces_nothing() {
        let (tx, mut rx) = result_channel();
        let feed = Feed::new("misc", "http://example.com", "unknown");

        DefaultMatcher::new().search(&feed, "rust", &tx).await.unwrap();
        drop(tx);

        assert!(rx.recv().await.is_none());
    }
}
