use crate::acknowledgements::domain::{ComponentDescription, Platform};
use crate::ports::outbound::{FileAccessor, FileLocator};
use crate::shared::error::AckError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional license file names probed when a component does not
/// declare one explicitly, in lookup order.
const CONVENTIONAL_LICENSE_NAMES: &[&str] = &[
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    "LICENCE",
    "COPYING",
];

/// SandboxFileLocator adapter for locating component files in a sandbox
///
/// The sandbox is the root directory the components are installed under,
/// one subdirectory per root component name. An accessor is only produced
/// for components whose directory actually exists.
pub struct SandboxFileLocator {
    sandbox_root: PathBuf,
}

impl SandboxFileLocator {
    pub fn new(sandbox_root: PathBuf) -> Self {
        Self { sandbox_root }
    }

    /// Validates that the sandbox root exists and is a directory
    ///
    /// # Errors
    /// Returns an error if the sandbox path is missing or not a directory
    pub fn validate(&self) -> Result<()> {
        if !self.sandbox_root.exists() {
            return Err(AckError::InvalidSandboxPath {
                path: self.sandbox_root.clone(),
                reason: "directory does not exist".to_string(),
            }
            .into());
        }
        if !self.sandbox_root.is_dir() {
            return Err(AckError::InvalidSandboxPath {
                path: self.sandbox_root.clone(),
                reason: "path is not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl FileLocator for SandboxFileLocator {
    fn file_accessor(
        &self,
        component: &ComponentDescription,
        _platform: &Platform,
    ) -> Option<Box<dyn FileAccessor>> {
        let component_root = self.sandbox_root.join(component.root_name());
        if !component_root.is_dir() {
            return None;
        }

        let declared_file = component
            .license
            .as_ref()
            .and_then(|license| license.file.clone());

        Some(Box::new(SandboxFileAccessor {
            component_root,
            declared_file,
        }))
    }
}

/// SandboxFileAccessor - file accessor bound to one component's installed
/// directory
///
/// A declared license file is reported whether or not it exists, so the
/// collector can distinguish "declared but missing" (warning) from "no
/// license file at all" (silent). The conventional-name fallback only
/// reports files that exist.
struct SandboxFileAccessor {
    component_root: PathBuf,
    declared_file: Option<String>,
}

impl FileAccessor for SandboxFileAccessor {
    fn license_file(&self) -> Option<PathBuf> {
        if let Some(declared) = &self.declared_file {
            return Some(self.component_root.join(declared));
        }

        CONVENTIONAL_LICENSE_NAMES
            .iter()
            .map(|name| self.component_root.join(name))
            .find(|candidate| candidate.is_file())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<String> {
        // Raw bytes decoded as UTF-8, lossy on invalid sequences, so an
        // oddly-encoded license never aborts generation.
        let bytes = fs::read(path).map_err(|e| AckError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
