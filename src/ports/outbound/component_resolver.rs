use crate::acknowledgements::domain::ComponentDescription;
use crate::shared::Result;
use std::path::Path;

/// ComponentResolver port for obtaining resolved component descriptions
///
/// This port abstracts the external dependency-resolution system that
/// produces the ordered list of components used by a build target. The
/// list may contain sub-components that share a root component.
pub trait ComponentResolver {
    /// Resolves the ordered component list for a generation request
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the resolved-components manifest
    ///
    /// # Returns
    /// The ordered sequence of component descriptions
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The manifest cannot be read or parsed
    fn resolve_components(&self, manifest_path: &Path) -> Result<Vec<ComponentDescription>>;
}
