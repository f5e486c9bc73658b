use crate::domain::ports::Notifier;
use std::sync::{Arc, Mutex, PoisonError};

/// A thread-safe notifier that keeps every message in memory.
///
/// Uses `Arc<Mutex<Vec<String>>>` so clones share the same log; hand one clone
/// to the gateways and keep another to inspect what they emitted.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Creates a new, empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
