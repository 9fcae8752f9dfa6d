use crate::acknowledgements::domain::LicenseDeclaration;
use std::path::PathBuf;

/// LicenseSource policy for determining where license text comes from
///
/// This policy encodes the precedence rules for resolving a component's
/// license text when multiple sources are possible.
///
/// Priority order:
/// 1. Literal text embedded in the license declaration
/// 2. A license file located within the component's installed files
/// 3. No source at all (license text stays absent)
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseSource {
    /// Use the embedded license text verbatim
    Inline(String),
    /// Read the license text from this file
    File(PathBuf),
    /// No license text is available
    Absent,
}

impl LicenseSource {
    /// Selects the license text source for a component
    ///
    /// The file lookup is passed as a closure so that it only runs when
    /// the declaration carries no literal text; a component with embedded
    /// license text never touches the file system.
    ///
    /// # Arguments
    /// * `license` - The component's license declaration, if any
    /// * `locate` - Lazy lookup of the component's license file path
    ///
    /// # Returns
    /// The selected source, `Absent` when no license information or file
    /// path is available
    pub fn select<F>(license: Option<&LicenseDeclaration>, locate: F) -> Self
    where
        F: FnOnce() -> Option<PathBuf>,
    {
        let Some(license) = license else {
            return LicenseSource::Absent;
        };

        if let Some(text) = &license.text {
            return LicenseSource::Inline(text.clone());
        }

        match locate() {
            Some(path) => LicenseSource::File(path),
            None => LicenseSource::Absent,
        }
    }
}
