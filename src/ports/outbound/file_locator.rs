use crate::acknowledgements::domain::{ComponentDescription, Platform};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileAccessor port exposing a component's installed license file
///
/// An accessor is bound to one component's installed location. It reports
/// the declared license file path (if any), whether that file actually
/// exists, and reads its full contents.
pub trait FileAccessor {
    /// Returns the declared license file path, if the component declares
    /// one or a conventional license file can be located.
    ///
    /// The returned path is not guaranteed to exist; callers must check
    /// with [`FileAccessor::exists`] before reading.
    fn license_file(&self) -> Option<PathBuf>;

    /// Reports whether the given path exists as a regular file.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the full raw contents of the given file as text.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> Result<String>;
}

/// FileLocator port for obtaining a file accessor per component
///
/// This port abstracts the sandbox (installation root) lookup: given a
/// component and the target platform, it yields an accessor for the
/// component's installed files, or `None` when the component has no
/// accessible installed location.
pub trait FileLocator {
    fn file_accessor(
        &self,
        component: &ComponentDescription,
        platform: &Platform,
    ) -> Option<Box<dyn FileAccessor>>;
}
