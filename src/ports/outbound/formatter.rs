use crate::acknowledgements::domain::AcknowledgementDocument;
use crate::shared::Result;

/// DocumentFormatter port for formatting the acknowledgements document
///
/// This port abstracts the serialization of the in-memory document into a
/// concrete output format (JSON, Markdown, etc.).
pub trait DocumentFormatter {
    /// Formats the acknowledgements document as an output string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &AcknowledgementDocument) -> Result<String>;
}
