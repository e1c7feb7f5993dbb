//! Result sinks
//!
//! A sink drains the result channel, rendering each result as it arrives,
//! and returns only once the channel has been closed.

mod console;
mod json;

pub use console::ConsoleDisplay;
pub use json::JsonDisplay;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::results::ResultReceiver;
use async_trait::async_trait;

/// Consumer of a live sequence of results
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Render results until the channel closes; returns how many were rendered
    async fn display(&self, results: ResultReceiver) -> Result<usize>;
}

/// Sink writing to stdout in the configured format
pub fn stdout_sink(format: OutputFormat) -> Box<dyn ResultSink> {
    match format {
        OutputFormat::Text => Box::new(ConsoleDisplay::new(std::io::stdout())),
        OutputFormat::Json => Box::new(JsonDisplay::new(std::io::stdout())),
    }
}
