use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::config::ConfigFile;
use crate::ports::outbound::DocumentFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn DocumentFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}

/// Generate an acknowledgements manifest for third-party components
#[derive(Parser, Debug)]
#[command(name = "ackgen")]
#[command(version)]
#[command(
    about = "Collect license and authorship metadata for third-party components",
    long_about = None
)]
pub struct Args {
    /// Path to the resolved-components manifest (JSON)
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Sandbox directory the components are installed under
    #[arg(short, long)]
    pub sandbox: Option<String>,

    /// Target platform identifier (e.g. ios, macos)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Root component names to exclude (repeatable)
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Explicit config file path (defaults to ./ackgen.config.toml discovery)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Fills unset flags from a config file. CLI values always win;
    /// exclusion lists are merged.
    pub fn merge_config(&mut self, config: ConfigFile) -> Result<(), String> {
        if self.manifest.is_none() {
            self.manifest = config.manifest;
        }
        if self.sandbox.is_none() {
            self.sandbox = config.sandbox;
        }
        if self.platform.is_none() {
            self.platform = config.platform;
        }
        if self.format.is_none() {
            self.format = config.format.as_deref().map(str::parse).transpose()?;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if let Some(exclude) = config.exclude {
            for name in exclude {
                if !self.exclude.contains(&name) {
                    self.exclude.push(name);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> Args {
        Args {
            manifest: None,
            sandbox: None,
            platform: None,
            format: None,
            exclude: vec![],
            output: None,
            config: None,
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "Markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("plist".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_merge_config_fills_unset_flags() {
        let mut args = empty_args();
        args.merge_config(ConfigFile {
            manifest: Some("components.json".to_string()),
            sandbox: Some("Pods".to_string()),
            platform: Some("ios".to_string()),
            format: Some("markdown".to_string()),
            output: Some("ACK.md".to_string()),
            exclude: Some(vec!["Internal".to_string()]),
            unknown_fields: Default::default(),
        })
        .unwrap();

        assert_eq!(args.manifest.as_deref(), Some("components.json"));
        assert_eq!(args.sandbox.as_deref(), Some("Pods"));
        assert_eq!(args.platform.as_deref(), Some("ios"));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output.as_deref(), Some("ACK.md"));
        assert_eq!(args.exclude, vec!["Internal".to_string()]);
    }

    #[test]
    fn test_merge_config_cli_flags_win() {
        let mut args = empty_args();
        args.platform = Some("macos".to_string());
        args.exclude = vec!["FromCli".to_string()];

        args.merge_config(ConfigFile {
            platform: Some("ios".to_string()),
            exclude: Some(vec!["FromCli".to_string(), "FromConfig".to_string()]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(args.platform.as_deref(), Some("macos"));
        assert_eq!(
            args.exclude,
            vec!["FromCli".to_string(), "FromConfig".to_string()]
        );
    }

    #[test]
    fn test_merge_config_rejects_bad_format() {
        let mut args = empty_args();
        let result = args.merge_config(ConfigFile {
            format: Some("xml".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
