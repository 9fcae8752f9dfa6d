mod mock_diagnostic_sink;
mod mock_file_locator;
mod mock_renderer;
mod mock_resolver;

pub use mock_diagnostic_sink::MockDiagnosticSink;
pub use mock_file_locator::MockFileLocator;
pub use mock_renderer::MockMarkupRenderer;
pub use mock_resolver::MockComponentResolver;
