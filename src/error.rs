//! Error types for feedsearch
//!
//! `SearchError` covers the fatal conditions that abort a whole run or the
//! registration phase. `MatchError` stays inside a single worker and is only
//! ever logged and reported, never propagated into the orchestrator.

/// Fatal errors for registration and search runs
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The feed source could not produce the list of feeds
    #[error("failed to retrieve feeds: {0}")]
    FeedRetrieval(String),

    /// A matcher is already bound to this feed type
    #[error("{0} matcher already registered")]
    DuplicateMatcher(String),

    /// No matcher for the feed type and no default matcher registered
    #[error("no matcher registered for feed type '{0}' and no default matcher")]
    NoMatcher(String),

    /// The result sink failed while rendering results
    #[error("display error: {0}")]
    Display(String),

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::Display(err.to_string())
    }
}

/// Errors raised by a matching strategy while searching one feed
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MatchError {
    /// The feed has no location to fetch
    #[error("no feed location provided for '{0}'")]
    MissingLocation(String),

    /// The request could not be completed
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP response error {status}")]
    Http { status: u16 },

    /// The feed document could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// The search term is not a valid pattern
    #[error("invalid search term: {0}")]
    InvalidTerm(String),

    /// The result sink stopped receiving before the worker finished
    #[error("result channel closed")]
    ChannelClosed,

    /// The worker task panicked
    #[error("worker panicked: {0}")]
    Panicked(String),
}

/// Convenience alias for fallible feedsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_matcher_message() {
        let err = SearchError::DuplicateMatcher("rss".into());
        assert_eq!(err.to_string(), "rss matcher already registered");
    }

    #[test]
    fn http_status_message() {
        let err = MatchError::Http { status: 404 };
        assert_eq!(err.to_string(), "HTTP response error 404");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
        assert_send_sync::<MatchError>();
    }
}
