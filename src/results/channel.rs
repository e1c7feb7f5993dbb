//! Fan-in channel between matchers and the result sink

use super::types::SearchResult;
use crate::error::MatchError;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// Smallest capacity tokio allows. A sender waits for the sink once a single
/// result is in flight.
const CHANNEL_CAPACITY: usize = 1;

/// Create a connected sender/receiver pair
pub fn result_channel() -> (ResultSender, ResultReceiver) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    (ResultSender { tx }, ResultReceiver { rx })
}

/// Producer half, one per worker.
///
/// Matchers only borrow it. Copies are made by the executor alone, so a
/// matcher cannot keep the channel open after its worker has finished.
#[derive(Debug)]
pub struct ResultSender {
    tx: mpsc::Sender<SearchResult>,
}

impl ResultSender {
    /// Another handle on the same channel for a new worker
    pub(crate) fn clone_for_worker(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }

    /// Send one result, waiting until the sink has room
    pub async fn send(&self, result: SearchResult) -> Result<(), MatchError> {
        self.tx
            .send(result)
            .await
            .map_err(|_| MatchError::ChannelClosed)
    }

    /// Whether the receiving side has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half, handed to the result sink
#[derive(Debug)]
pub struct ResultReceiver {
    rx: mpsc::Receiver<SearchResult>,
}

impl ResultReceiver {
    /// Receive the next result; `None` once every sender is dropped
    pub async fn recv(&mut self) -> Option<SearchResult> {
        self.rx.recv().await
    }
}

impl Stream for ResultReceiver {
    type Item = SearchResult;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
