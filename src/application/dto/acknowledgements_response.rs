use crate::acknowledgements::domain::AcknowledgementDocument;

/// AcknowledgementsResponse - Internal response DTO from the generation
/// use case
#[derive(Debug, Clone)]
pub struct AcknowledgementsResponse {
    /// The generated document; `None` when no entries remained after
    /// deduplication and exclusion
    pub document: Option<AcknowledgementDocument>,
    /// Number of component descriptions resolved from the manifest
    pub resolved_count: usize,
}

impl AcknowledgementsResponse {
    pub fn new(document: Option<AcknowledgementDocument>, resolved_count: usize) -> Self {
        Self {
            document,
            resolved_count,
        }
    }

    /// Number of entries in the generated document
    pub fn entry_count(&self) -> usize {
        self.document.as_ref().map_or(0, |document| document.len())
    }
}
