use ackgen::prelude::*;

/// Mock MarkupRenderer applying an identity-like transform so tests can
/// confirm pass-through of description text
pub struct MockMarkupRenderer;

impl MarkupRenderer for MockMarkupRenderer {
    fn render(&self, markup: &str) -> String {
        format!("<rendered>{}</rendered>", markup)
    }
}
