//! Matcher module
//!
//! Defines the Matcher trait, the registry that binds feed types to
//! matchers, and the built-in matchers.

mod default;
mod registry;
mod rss;
mod traits;

pub use default::DefaultMatcher;
pub use registry::{MatcherRegistry, DEFAULT_FEED_TYPE};
pub use rss::{parse_document, RssDocument, RssItem, RssMatcher};
pub use traits::Matcher;
