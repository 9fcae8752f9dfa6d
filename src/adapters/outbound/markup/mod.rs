pub mod html_renderer;

pub use html_renderer::MarkdownHtmlRenderer;
