use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for acknowledgements generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AckError {
    #[error("Component manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse component manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest contains valid JSON in the expected schema")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid sandbox path: {path}\nReason: {reason}\n\n💡 Hint: Please point --sandbox at the directory containing the installed components")]
    InvalidSandboxPath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_not_found_display() {
        let error = AckError::ManifestNotFound {
            path: PathBuf::from("/project/components.json"),
            suggestion: "Run the resolver first".to_string(),
        };
        let message = format!("{}", error);
        assert!(message.contains("/project/components.json"));
        assert!(message.contains("Run the resolver first"));
        assert!(message.contains("💡 Hint"));
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let error = AckError::ManifestParseError {
            path: PathBuf::from("components.json"),
            details: "expected value at line 1".to_string(),
        };
        let message = format!("{}", error);
        assert!(message.contains("components.json"));
        assert!(message.contains("expected value at line 1"));
    }

    #[test]
    fn test_invalid_sandbox_path_display() {
        let error = AckError::InvalidSandboxPath {
            path: PathBuf::from("/missing"),
            reason: "directory does not exist".to_string(),
        };
        let message = format!("{}", error);
        assert!(message.contains("/missing"));
        assert!(message.contains("directory does not exist"));
    }

    #[test]
    fn test_security_error_display() {
        let error = AckError::SecurityError {
            path: PathBuf::from("/tmp/link"),
            reason: "path is a symbolic link".to_string(),
            hint: "Remove the symlink".to_string(),
        };
        let message = format!("{}", error);
        assert!(message.contains("Security violation"));
        assert!(message.contains("Remove the symlink"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = AckError::Validation {
            message: "exclude entries must not be empty".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Validation error: exclude entries must not be empty"
        );
    }
}
