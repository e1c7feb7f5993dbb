//! Counting completion barrier for search workers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

struct Inner {
    remaining: AtomicUsize,
    notify: Notify,
}

/// Waits until every issued [`CompletionToken`] has been dropped.
///
/// The barrier is created together with exactly one token per worker. Tokens
/// cannot be cloned, and dropping one is the only way to signal, so each
/// worker signals exactly once whether it returns normally, fails, or
/// unwinds.
#[derive(Clone)]
pub struct CompletionBarrier {
    inner: Arc<Inner>,
}

impl CompletionBarrier {
    /// Create a barrier for `count` workers along with their tokens
    pub fn new(count: usize) -> (Self, Vec<CompletionToken>) {
        let inner = Arc::new(Inner {
            remaining: AtomicUsize::new(count),
            notify: Notify::new(),
        });

        let tokens = (0..count)
            .map(|_| CompletionToken {
                inner: inner.clone(),
            })
            .collect();

        (Self { inner }, tokens)
    }

    /// Workers that have not signalled yet
    pub fn remaining(&self) -> usize {
        self.inner.remaining.load(Ordering::Acquire)
    }

    /// Wait until every token has been dropped
    pub async fn wait(&self) {
        loop {
            // Register before checking so a final signal between the check
            // and the await is not lost.
            let notified = self.inner.notify.notified();
            if self.remaining() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// One worker's completion signal, delivered on drop
pub struct CompletionToken {
    inner: Arc<Inner>,
}

impl CompletionToken {
    /// Signal completion now
    pub fn complete(self) {}
}

impl Drop for CompletionToken {
    fn drop(&mut self) {
        if self.inner.remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.notify.notify_waiters();
        }
    }
}
