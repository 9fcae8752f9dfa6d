//! ackgen - Acknowledgements manifest generator
//!
//! This library collects license and authorship metadata for the
//! third-party components used by a build target and renders it into an
//! ordered acknowledgements document consumable by a downstream UI,
//! following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`acknowledgements`): Pure business logic - domain
//!   models, the license source policy, and the collector service
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ackgen::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let component_resolver = FileSystemManifestResolver::new();
//! let file_locator = SandboxFileLocator::new(PathBuf::from("Pods"));
//! let renderer = MarkdownHtmlRenderer::new();
//! let diagnostics = StderrDiagnosticSink::new();
//!
//! // Create use case
//! let use_case = GenerateAcknowledgementsUseCase::new(
//!     component_resolver,
//!     file_locator,
//!     renderer,
//!     diagnostics,
//! );
//!
//! // Execute
//! let request = AcknowledgementsRequest::new(
//!     PathBuf::from("components.json"),
//!     Platform::new("ios"),
//!     vec![],
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! if let Some(document) = response.document {
//!     let formatter = JsonFormatter::new();
//!     let output = formatter.format(&document)?;
//!     println!("{}", output);
//! }
//! # Ok(())
//! # }
//! ```

pub mod acknowledgements;
pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::acknowledgements::domain::{
        AcknowledgementDocument, AcknowledgementEntry, ComponentDescription, LicenseDeclaration,
        Platform,
    };
    pub use crate::acknowledgements::policies::LicenseSource;
    pub use crate::acknowledgements::services::AcknowledgementCollector;
    pub use crate::adapters::outbound::console::StderrDiagnosticSink;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemManifestResolver, FileSystemWriter, SandboxFileLocator, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::markup::MarkdownHtmlRenderer;
    pub use crate::application::dto::{AcknowledgementsRequest, AcknowledgementsResponse};
    pub use crate::application::use_cases::GenerateAcknowledgementsUseCase;
    pub use crate::ports::outbound::{
        ComponentResolver, DiagnosticSink, DocumentFormatter, FileAccessor, FileLocator,
        MarkupRenderer, OutputPresenter,
    };
    pub use crate::shared::Result;
}
