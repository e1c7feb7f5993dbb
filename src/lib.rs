//! feedsearch: concurrent, pluggable search across data feeds
//!
//! Each feed is searched by the matcher registered for its type, one task
//! per feed, and matches are streamed to a result sink as they are found.

pub mod config;
pub mod display;
pub mod error;
pub mod feeds;
pub mod matchers;
pub mod metrics;
pub mod network;
pub mod results;
pub mod search;

pub use config::Settings;
pub use display::ResultSink;
pub use error::{MatchError, SearchError};
pub use feeds::{Feed, FeedSource};
pub use matchers::{Matcher, MatcherRegistry};
pub use results::{SearchReport, SearchResult};
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
