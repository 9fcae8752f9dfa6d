/// MarkupRenderer port for converting lightweight markup to rich text
///
/// Rendering is a pure, stateless pass: implementations must be
/// side-effect-free and idempotent for identical input text, so a single
/// instance can be reused across generation calls. Implementations must be
/// `Send + Sync` to support concurrent generation for different targets.
pub trait MarkupRenderer: Send + Sync {
    /// Renders markup text into its rich-text representation
    fn render(&self, markup: &str) -> String;
}
