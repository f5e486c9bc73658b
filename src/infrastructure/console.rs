use crate::domain::ports::Notifier;
use std::io::{self, Write};
use tracing::warn;

/// Writes each notification as a line on standard output.
#[derive(Default, Clone, Copy)]
pub struct StdoutNotifier;

impl StdoutNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{message}").and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write gateway notification");
        }
    }
}
