//! Feed module
//!
//! Defines the `Feed` model and the sources that supply feeds to a search.

mod models;
mod source;

pub use models::Feed;
pub use source::{FeedSource, JsonFeedSource, StaticFeedSource};
