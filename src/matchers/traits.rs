//! Matcher trait

use crate::error::MatchError;
use crate::feeds::Feed;
use crate::results::ResultSender;
use async_trait::async_trait;

/// A pluggable strategy that searches one feed for a term.
///
/// Implementations push each match into `results` as soon as it is found
/// instead of returning a batch, so the first match of a fast feed reaches
/// the sink before a slow feed finishes. One instance may be searching many
/// feeds at once, so implementations must not keep per-call mutable state.
#[async_trait]
pub trait Matcher: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Search `feed` for `term`, sending every match to `results`
    async fn search(
        &self,
        feed: &Feed,
        term: &str,
        results: &ResultSender,
    ) -> Result<(), MatchError>;
}
