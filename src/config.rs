//! Configuration file support for ackgen.
//!
//! Provides TOML-based configuration through `ackgen.config.toml` files,
//! including data structures, file loading, and validation. Command-line
//! flags take precedence over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "ackgen.config.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub manifest: Option<String>,
    pub sandbox: Option<String>,
    pub platform: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub exclude: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref exclude) = config.exclude {
        for (i, name) in exclude.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: exclude[{}] must not be empty.\n\n\
                     💡 Hint: Each exclude entry must be a non-empty component name.",
                    i
                );
            }
        }
    }

    if let Some(ref format) = config.format {
        match format.to_lowercase().as_str() {
            "json" | "markdown" | "md" => {}
            other => bail!(
                "Invalid config: unknown format '{}'.\n\n\
                 💡 Hint: Supported formats are 'json' and 'markdown'.",
                other
            ),
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
