pub mod component;
pub mod document;
pub mod platform;

pub use component::{ComponentDescription, LicenseDeclaration};
pub use document::{AcknowledgementDocument, AcknowledgementEntry};
pub use platform::Platform;
