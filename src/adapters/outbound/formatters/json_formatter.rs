use crate::acknowledgements::domain::AcknowledgementDocument;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for serializing the acknowledgements document
///
/// Produces the canonical machine-readable form: a single top-level
/// `specs` key holding the ordered entry list, with the UI field
/// spellings (`socialMediaURL`, `licenseType`, `licenseText`).
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &AcknowledgementDocument) -> Result<String> {
        let mut output = serde_json::to_string_pretty(document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize acknowledgements: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
