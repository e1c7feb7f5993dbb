//! Feed data model

use serde::{Deserialize, Serialize};

/// A named, typed data source to be searched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feed {
    /// Display name of the feed
    #[serde(rename = "site")]
    pub name: String,
    /// URI the matcher fetches
    #[serde(rename = "link")]
    pub location: String,
    /// Feed type tag, used as the matcher registry key
    #[serde(rename = "type")]
    pub feed_type: String,
}

impl Feed {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        feed_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            feed_type: feed_type.into(),
        }
    }
}
