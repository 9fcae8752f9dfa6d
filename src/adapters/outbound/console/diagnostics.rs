use crate::ports::outbound::DiagnosticSink;

/// StderrDiagnosticSink adapter for reporting warnings to stderr
///
/// Warnings go to stderr so they never mix with the document written to
/// stdout. stderr writes are line-buffered and safe for concurrent use.
pub struct StderrDiagnosticSink;

impl StderrDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for StderrDiagnosticSink {
    fn warn(&self, message: &str) {
        eprintln!("⚠️  Warning: {}", message);
    }
}
