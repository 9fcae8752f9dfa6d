use crate::acknowledgements::domain::Platform;
use std::path::PathBuf;

/// AcknowledgementsRequest - Internal request DTO for the generation
/// use case
#[derive(Debug, Clone)]
pub struct AcknowledgementsRequest {
    /// Path to the resolved-components manifest
    pub manifest_path: PathBuf,
    /// Platform the generation request targets
    pub platform: Platform,
    /// Root component names to exclude from the document
    pub excluded_names: Vec<String>,
}

impl AcknowledgementsRequest {
    pub fn new(manifest_path: PathBuf, platform: Platform, excluded_names: Vec<String>) -> Self {
        Self {
            manifest_path,
            platform,
            excluded_names,
        }
    }
}
