use crate::acknowledgements::domain::{ComponentDescription, LicenseDeclaration};
use crate::ports::outbound::ComponentResolver;
use crate::shared::error::AckError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum manifest size for security (10 MB)
const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// On-disk schema of the resolved-components manifest.
///
/// The manifest is produced by the external dependency-resolution system;
/// keys use the same spellings as the output document where they overlap.
#[derive(Debug, Deserialize)]
struct ManifestSchema {
    components: Vec<ComponentSchema>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentSchema {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default, rename = "socialMediaURL")]
    social_media_url: Option<String>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    license: Option<LicenseSchema>,
    #[serde(default)]
    homepage: String,
    #[serde(default)]
    root: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LicenseSchema {
    #[serde(default, rename = "type")]
    license_type: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    file: Option<String>,
}

impl From<ComponentSchema> for ComponentDescription {
    fn from(schema: ComponentSchema) -> Self {
        ComponentDescription {
            name: schema.name,
            version: schema.version,
            authors: schema.authors,
            social_media_url: schema.social_media_url,
            summary: schema.summary,
            description: schema.description,
            license: schema.license.map(|license| LicenseDeclaration {
                license_type: license.license_type,
                text: license.text,
                file: license.file,
            }),
            homepage: schema.homepage,
            root: schema.root,
        }
    }
}

/// FileSystemManifestResolver adapter for reading component manifests
///
/// This adapter implements the ComponentResolver port by parsing a JSON
/// manifest of resolved component descriptions from the file system.
pub struct FileSystemManifestResolver;

impl FileSystemManifestResolver {
    pub fn new() -> Self {
        Self
    }

    /// Safely read the manifest with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate the path is a regular file
    fn safe_read_manifest(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read manifest metadata: {}", e))?;

        if metadata.is_symlink() {
            return Err(AckError::SecurityError {
                path: path.to_path_buf(),
                reason: "manifest is a symbolic link".to_string(),
                hint: "For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_MANIFEST_SIZE {
            return Err(AckError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("manifest is too large ({} bytes)", file_size),
                hint: format!("Maximum allowed size is {} bytes.", MAX_MANIFEST_SIZE),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            AckError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemManifestResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentResolver for FileSystemManifestResolver {
    fn resolve_components(&self, manifest_path: &Path) -> Result<Vec<ComponentDescription>> {
        if !manifest_path.exists() {
            return Err(AckError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "The resolved-components manifest \"{}\" does not exist.\n   \
                     Run the dependency resolver first, or point --manifest at the correct file.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_manifest(manifest_path)?;

        let manifest: ManifestSchema =
            serde_json::from_str(&content).map_err(|e| AckError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(manifest
            .components
            .into_iter()
            .map(ComponentDescription::from)
            .collect())
    }
}
