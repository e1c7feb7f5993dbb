//! Plain-text result rendering

use super::ResultSink;
use crate::error::Result;
use crate::results::{ResultReceiver, SearchResult};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Renders each result as `Field:\nContent` followed by a blank line
pub struct ConsoleDisplay<W> {
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the writer, e.g. a buffer in tests
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn render(&self, result: &SearchResult) -> Result<()> {
        let mut out = self.out.lock().unwrap();
        write!(out, "{}:\n{}\n\n", result.field, result.content)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send + 'static> ResultSink for ConsoleDisplay<W> {
    async fn display(&self, mut results: ResultReceiver) -> Result<usize> {
        let mut count = 0;
        while let Some(result) = results.recv().await {
            self.render(&result)?;
            count += 1;
        }
        Ok(count)
    }
}
