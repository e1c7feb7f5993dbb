//! HTTP networking module
//!
//! Provides the HTTP client matchers use to fetch feed documents.

mod client;

pub use client::{FeedResponse, HttpClient};
