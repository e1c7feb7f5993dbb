//! Search execution and orchestration

use super::barrier::{CompletionBarrier, CompletionToken};
use crate::display::ResultSink;
use crate::error::{MatchError, Result};
use crate::feeds::{Feed, FeedSource};
use crate::matchers::{Matcher, MatcherRegistry};
use crate::metrics::Metrics;
use crate::results::{result_channel, FeedFailure, ResultSender, SearchReport};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Search executor that coordinates matching across every feed
pub struct Search {
    /// Where feeds come from
    source: Arc<dyn FeedSource>,
    /// Matcher registry, read-only once searches start
    registry: Arc<MatcherRegistry>,
    /// Run and per-feed-type statistics
    metrics: Arc<Metrics>,
}

impl Search {
    /// Create a new search executor
    pub fn new(source: Arc<dyn FeedSource>, registry: Arc<MatcherRegistry>) -> Self {
        Self {
            source,
            registry,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Share an existing metrics collector
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Search every feed for `term`, streaming matches into `sink`.
    ///
    /// Returns once the sink has drained the result channel, which is closed
    /// only after every worker has finished. Failing to retrieve feeds or to
    /// resolve a matcher for any feed aborts the run before any worker
    /// starts. A failing worker is logged and listed in the report.
    pub async fn run<S>(&self, term: &str, sink: &S) -> Result<SearchReport>
    where
        S: ResultSink + ?Sized,
    {
        let start = Instant::now();
        self.metrics.inc_run();

        let feeds = self.source.retrieve_feeds().await.map_err(|e| {
            error!("Feed retrieval failed: {}", e);
            e
        })?;

        // Every feed gets its matcher before any worker is launched.
        let jobs = feeds
            .into_iter()
            .map(|feed| -> Result<(Feed, Arc<dyn Matcher>)> {
                let matcher = self.registry.resolve(&feed.feed_type)?;
                Ok((feed, matcher))
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                error!("Matcher resolution failed: {}", e);
                e
            })?;

        let feeds_searched = jobs.len();
        info!("Searching {} feeds for '{}'", feeds_searched, term);

        let term: Arc<str> = Arc::from(term);
        let (sender, receiver) = result_channel();
        let (barrier, tokens) = CompletionBarrier::new(feeds_searched);
        let failures = Arc::new(Mutex::new(Vec::new()));

        for ((feed, matcher), token) in jobs.into_iter().zip(tokens) {
            tokio::spawn(Self::search_feed(
                matcher,
                feed,
                term.clone(),
                sender.clone_for_worker(),
                failures.clone(),
                self.metrics.clone(),
                token,
            ));
        }

        // The watcher holds the last sender; dropping it closes the channel.
        let watcher = tokio::spawn(async move {
            barrier.wait().await;
            drop(sender);
            debug!("All feeds processed, result channel closed");
        });

        let displayed = sink.display(receiver).await;

        if let Err(e) = watcher.await {
            error!("Completion watcher failed: {}", e);
        }

        let displayed = displayed?;
        self.metrics.add_results(displayed);

        let failures = std::mem::take(&mut *failures.lock().unwrap());
        let elapsed = start.elapsed();
        info!(
            "Search for '{}' finished in {:?}: {} results from {} feeds, {} failed",
            term,
            elapsed,
            displayed,
            feeds_searched,
            failures.len()
        );

        Ok(SearchReport {
            term: term.to_string(),
            feeds_searched,
            results_displayed: displayed,
            failures,
            elapsed,
        })
    }

    /// Search a single feed. Runs as its own task.
    async fn search_feed(
        matcher: Arc<dyn Matcher>,
        feed: Feed,
        term: Arc<str>,
        results: ResultSender,
        failures: Arc<Mutex<Vec<FeedFailure>>>,
        metrics: Arc<Metrics>,
        token: CompletionToken,
    ) {
        let start = Instant::now();

        let outcome = AssertUnwindSafe(matcher.search(&feed, &term, &results))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(MatchError::Panicked(panic_message(panic.as_ref()))));

        // Release this worker's sender before signalling completion.
        drop(results);

        let elapsed = start.elapsed();
        metrics.record_feed(&feed.feed_type, elapsed, outcome.is_err());

        match outcome {
            Ok(()) => {
                debug!(
                    "Matcher {} finished {} in {:?}",
                    matcher.name(),
                    feed.name,
                    elapsed
                );
            }
            Err(e) => {
                warn!(
                    "Search of {} with {} matcher failed: {}",
                    feed.name,
                    matcher.name(),
                    e
                );
                failures.lock().unwrap().push(FeedFailure::new(&feed.name, &e));
            }
        }

        token.complete();
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
