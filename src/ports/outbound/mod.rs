/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod component_resolver;
pub mod diagnostic_sink;
pub mod file_locator;
pub mod formatter;
pub mod markup_renderer;
pub mod output_presenter;

pub use component_resolver::ComponentResolver;
pub use diagnostic_sink::DiagnosticSink;
pub use file_locator::{FileAccessor, FileLocator};
pub use formatter::DocumentFormatter;
pub use markup_renderer::MarkupRenderer;
pub use output_presenter::OutputPresenter;
