//! Query debouncing: rapid edits collapse into one recompute.
//!
//! The browser glue fed keystrokes through a reset-on-input timer; here the
//! same contract is a channel pair. [`QueryInput::submit`] normalizes and
//! enqueues each edit, and [`QueryDebouncer::next_query`] resolves to the
//! latest value only after the input has been quiet for the configured
//! period.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::normalize::normalize_search_text;

/// Input side: submit raw query edits as the user types.
#[derive(Debug, Clone)]
pub struct QueryInput {
    tx: mpsc::UnboundedSender<String>,
}

impl QueryInput {
    /// Normalize and enqueue one query edit. A closed output side is fine;
    /// the edit is simply dropped.
    pub fn submit(&self, raw: &str) {
        let _ = self.tx.send(normalize_search_text(raw));
    }
}

/// Output side: yields debounced, normalized queries.
#[derive(Debug)]
pub struct QueryDebouncer {
    delay: Duration,
    rx: mpsc::UnboundedReceiver<String>,
}

impl QueryDebouncer {
    /// Wait for the next debounced query.
    ///
    /// Resolves with the most recent submission once no further edit has
    /// arrived for the quiet period. Returns `None` when every input handle
    /// is gone and all pending edits were drained.
    pub async fn next_query(&mut self) -> Option<String> {
        let mut latest = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.delay, self.rx.recv()).await {
                Ok(Some(next)) => latest = next,
                // Input side closed: flush what we have.
                Ok(None) => return Some(latest),
                // Quiet period elapsed.
                Err(_) => return Some(latest),
            }
        }
    }
}

/// Create a linked input/debouncer pair with the given quiet period.
#[must_use]
pub fn debounce_channel(delay: Duration) -> (QueryInput, QueryDebouncer) {
    let (tx, rx) = mpsc::unbounded_channel();
    (QueryInput { tx }, QueryDebouncer { delay, rx })
}
