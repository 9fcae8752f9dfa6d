use crate::acknowledgements::domain::{AcknowledgementDocument, AcknowledgementEntry};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter for a human-readable acknowledgements file
///
/// This adapter implements the DocumentFormatter port for Markdown output,
/// the traditional ACKNOWLEDGEMENTS.md shape: one section per component
/// with its summary, metadata, and full license text.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_entry(&self, output: &mut String, entry: &AcknowledgementEntry) {
        output.push_str(&format!("## {}\n\n", entry.name));

        if !entry.summary.is_empty() {
            output.push_str(&format!("{}\n\n", entry.summary));
        }

        output.push_str(&format!("- Version: {}\n", entry.version));
        if !entry.authors.is_empty() {
            output.push_str(&format!("- Authors: {}\n", entry.authors.join(", ")));
        }
        if !entry.homepage.is_empty() {
            output.push_str(&format!("- Homepage: {}\n", entry.homepage));
        }
        if let Some(license_type) = &entry.license_type {
            output.push_str(&format!("- License: {}\n", license_type));
        }
        output.push('\n');

        if let Some(license_text) = &entry.license_text {
            output.push_str(&format!("```\n{}\n```\n\n", license_text.trim_end()));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for MarkdownFormatter {
    fn format(&self, document: &AcknowledgementDocument) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Acknowledgements\n\n");
        output.push_str(
            "This project makes use of the following third-party components.\n\n",
        );

        for entry in &document.specs {
            self.render_entry(&mut output, entry);
        }

        Ok(output)
    }
}
