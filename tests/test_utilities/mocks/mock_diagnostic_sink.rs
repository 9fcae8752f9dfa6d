use ackgen::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DiagnosticSink capturing warnings for assertions
#[derive(Default, Clone)]
pub struct MockDiagnosticSink {
    pub warnings: Arc<Mutex<Vec<String>>>,
}

impl MockDiagnosticSink {
    pub fn new() -> Self {
        Self {
            warnings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.lock().unwrap().len()
    }
}

impl DiagnosticSink for MockDiagnosticSink {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
