mod acknowledgements;
mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod shared;

use acknowledgements::domain::Platform;
use adapters::outbound::console::StderrDiagnosticSink;
use adapters::outbound::filesystem::{
    FileSystemManifestResolver, FileSystemWriter, SandboxFileLocator, StdoutPresenter,
};
use adapters::outbound::markup::MarkdownHtmlRenderer;
use application::dto::AcknowledgementsRequest;
use application::use_cases::GenerateAcknowledgementsUseCase;
use cli::{Args, OutputFormat};
use ports::outbound::OutputPresenter;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_MANIFEST: &str = "components.json";
const DEFAULT_SANDBOX: &str = ".";
const DEFAULT_PLATFORM: &str = "ios";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = Args::parse_args();

    // Config file: explicit path wins over auto-discovery in the cwd
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    if let Some(config) = config {
        args.merge_config(config).map_err(|e| anyhow::anyhow!(e))?;
    }

    let manifest_path = PathBuf::from(args.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST));
    let sandbox_path = PathBuf::from(args.sandbox.as_deref().unwrap_or(DEFAULT_SANDBOX));
    let platform = Platform::new(args.platform.as_deref().unwrap_or(DEFAULT_PLATFORM));
    let format = args.format.unwrap_or(OutputFormat::Json);

    // Create adapters (Dependency Injection)
    let component_resolver = FileSystemManifestResolver::new();
    let file_locator = SandboxFileLocator::new(sandbox_path);
    file_locator.validate()?;
    let renderer = MarkdownHtmlRenderer::new();
    let diagnostics = StderrDiagnosticSink::new();

    // Create use case with injected dependencies
    let use_case = GenerateAcknowledgementsUseCase::new(
        component_resolver,
        file_locator,
        renderer,
        diagnostics,
    );

    let request = AcknowledgementsRequest::new(manifest_path, platform, args.exclude.clone());
    let response = use_case.execute(request)?;

    let Some(document) = response.document else {
        eprintln!(
            "ℹ️  No acknowledgements to report ({} component(s) resolved, all excluded or none found).",
            response.resolved_count
        );
        return Ok(());
    };

    eprintln!(
        "✅ Collected {} acknowledgement(s) from {} resolved component(s)",
        document.len(),
        response.resolved_count
    );

    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&document)?;

    let presenter: Box<dyn OutputPresenter> = match args.output.as_deref() {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    Ok(())
}
