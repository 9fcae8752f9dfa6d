pub mod file_writer;
pub mod manifest_resolver;
pub mod sandbox_locator;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use manifest_resolver::FileSystemManifestResolver;
pub use sandbox_locator::SandboxFileLocator;
