//! The logging collaborator the facade reports to.
//!
//! # Design
//! `MessageSink` is fire-and-forget: one string in, nothing out, no error
//! channel. The facade takes it as an injected `Arc<dyn MessageSink>` rather
//! than reaching for a global, so the composing application owns the log's
//! lifecycle. `MessageLog` is the stock append-only in-memory implementation.

use std::sync::Mutex;

/// Receives one human-readable message per facade operation.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

/// Append-only in-memory message log.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A poisoned lock only means some writer panicked mid-push; the log
    // itself is still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}
