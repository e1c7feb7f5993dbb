//! JSON-lines result rendering

use super::ResultSink;
use crate::error::{Result, SearchError};
use crate::results::{ResultReceiver, SearchResult};
use async_trait::async_trait;
use futures::StreamExt;
use std::io::Write;
use std::sync::Mutex;

/// Renders each result as one JSON object per line
pub struct JsonDisplay<W> {
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> JsonDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn render(&self, result: &SearchResult) -> Result<()> {
        let line = serde_json::to_string(result).map_err(|e| SearchError::Display(e.to_string()))?;
        let mut out = self.out.lock().unwrap();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send + 'static> ResultSink for JsonDisplay<W> {
    async fn display(&self, mut results: ResultReceiver) -> Result<usize> {
        let mut count = 0;
        while let Some(result) = results.next().await {
            self.render(&result)?;
            count += 1;
        }
        Ok(count)
    }
}
