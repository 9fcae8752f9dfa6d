pub mod diagnostics;

pub use diagnostics::StderrDiagnosticSink;
