//! Search orchestration module
//!
//! Fans a search term out to one worker per feed, fans their results into a
//! single channel, and closes that channel once every worker has finished.

mod barrier;
mod executor;

pub use barrier::{CompletionBarrier, CompletionToken};
pub use executor::Search;
