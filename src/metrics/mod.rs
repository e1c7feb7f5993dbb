//! Metrics collection module
//!
//! Counts search runs and, per feed type, how many feeds were searched, how
//! many of those searches failed and how long they took.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// Run-level and per-feed-type counters shared by every worker
pub struct Metrics {
    /// Total search runs
    total_runs: AtomicU64,
    /// Total results rendered by sinks
    total_results: AtomicU64,
    /// Outcomes keyed by feed type
    feed_types: RwLock<HashMap<String, FeedTypeCounters>>,
}

#[derive(Default)]
struct FeedTypeCounters {
    searches: u64,
    failures: u64,
    busy: Duration,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self {
            total_runs: AtomicU64::new(0),
            total_results: AtomicU64::new(0),
            feed_types: RwLock::new(HashMap::new()),
        }
    }

    /// Increment total run count
    pub fn inc_run(&self) {
        self.total_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Add rendered results
    pub fn add_results(&self, count: usize) {
        self.total_results.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record one finished feed search
    pub fn record_feed(&self, feed_type: &str, elapsed: Duration, failed: bool) {
        let mut feed_types = self.feed_types.write().unwrap();
        let counters = feed_types.entry(feed_type.to_string()).or_default();

        counters.searches += 1;
        counters.busy += elapsed;
        if failed {
            counters.failures += 1;
        }
    }

    pub fn get_total_runs(&self) -> u64 {
        self.total_runs.load(Ordering::Relaxed)
    }

    pub fn get_total_results(&self) -> u64 {
        self.total_results.load(Ordering::Relaxed)
    }

    /// Statistics for every feed type seen so far, ordered by feed type
    pub fn feed_type_summary(&self) -> Vec<FeedStats> {
        let feed_types = self.feed_types.read().unwrap();

        let mut summary: Vec<FeedStats> = feed_types
            .iter()
            .map(|(feed_type, counters)| FeedStats {
                feed_type: feed_type.clone(),
                searches: counters.searches,
                failures: counters.failures,
                avg_time: counters.busy / counters.searches.max(1) as u32,
            })
            .collect();
        summary.sort_by(|a, b| a.feed_type.cmp(&b.feed_type));
        summary
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for a single feed type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedStats {
    pub feed_type: String,
    pub searches: u64,
    pub failures: u64,
    /// Mean wall time of one feed search
    pub avg_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();

        metrics.inc_run();
        metrics.add_results(4);
        metrics.record_feed("rss", Duration::from_millis(100), false);

        assert_eq!(metrics.get_total_runs(), 1);
        assert_eq!(metrics.get_total_results(), 4);
        assert_eq!(
            metrics.feed_type_summary(),
            vec![FeedStats {
                feed_type: "rss".to_string(),
                searches: 1,
                failures: 0,
                avg_time: Duration::from_millis(100),
            }]
        );
    }

    #[test]
    fn test_failures_and_average_per_feed_type() {
        let metrics = Metrics::new();
        metrics.record_feed("rss", Duration::from_millis(100), false);
        metrics.record_feed("rss", Duration::from_millis(300), true);
        metrics.record_feed("default", Duration::from_millis(1), false);

        let summary = metrics.feed_type_summary();
        let types: Vec<&str> = summary.iter().map(|s| s.feed_type.as_str()).collect();
        assert_eq!(types, vec!["default", "rss"]);

        assert_eq!(summary[1].searches, 2);
        assert_eq!(summary[1].failures, 1);
        assert_eq!(summary[1].avg_time, Duration::from_millis(200));
    }

    #[test]
    fn test_empty_summary() {
        assert!(Metrics::new().feed_type_summary().is_empty());
    }
}
