/// DiagnosticSink port for non-fatal, human-readable warnings
///
/// The collector emits exactly one class of diagnostic: a warning when a
/// declared license file cannot be read. The sink must be safe for
/// concurrent use, since different targets may generate in parallel.
pub trait DiagnosticSink: Send + Sync {
    /// Emits a warning message
    fn warn(&self, message: &str);
}
