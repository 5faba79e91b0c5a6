//! Diagnostic channel for non-fatal load and clear problems.

use std::sync::Mutex;

use tracing::warn;

/// Message reported for malformed record lines and rejected mutator calls.
pub const GENERAL_ERROR: &str = "Invalid Profile data or format.";

/// Write-only sink for human-readable diagnostics.
///
/// Malformed lines and mutator failures are reported here instead of being
/// returned to the caller.
pub trait DiagnosticSink {
    fn report(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at warn level. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, message: &str) {
        warn!(target: "profilekit", "{message}");
    }
}

/// Prints each diagnostic as a line on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Keeps diagnostics in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out everything reported so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// Drops everything reported so far.
    pub fn clear(&self) {
        match self.messages.lock() {
            Ok(mut m) => m.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn report(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut m) => m.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &D {
    fn report(&self, message: &str) {
        (**self).report(message);
    }
}
