//! Error types and handling for overlay
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//! - [`source`]: Source tree errors

pub mod config;
pub mod fs;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for overlay operations
#[derive(Error, Diagnostic, Debug)]
pub enum OverlayError {
    // Source errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(overlay::source::not_found),
        help("Pass the directory holding the vendor tree to overlay")
    )]
    SourceNotFound { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(overlay::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(overlay::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(overlay::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(overlay::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(overlay::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to list directory: {path}: {reason}")]
    #[diagnostic(code(overlay::fs::read_dir_failed))]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(
        code(overlay::fs::remove_failed),
        help("Check permissions on the destination tree; earlier removals are not rolled back")
    )]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(overlay::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        OverlayError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for OverlayError {
    fn from(err: serde_yaml::Error) -> Self {
        OverlayError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = OverlayError::SourceNotFound {
            path: "vendor/core".to_string(),
        };
        assert_eq!(err.to_string(), "Source directory not found: vendor/core");
    }

    #[test]
    fn test_error_code() {
        let err = OverlayError::SourceNotFound {
            path: "vendor/core".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("overlay::source::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OverlayError = io_err.into();
        assert!(matches!(err, OverlayError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: OverlayError = parse_result.unwrap_err().into();
        assert!(matches!(err, OverlayError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_remove_failed_error,
        fs::remove_failed("/dest/app/file.txt", "permission denied"),
        "Failed to remove",
        "/dest/app/file.txt",
        "permission denied"
    );

    test_error_contains!(
        test_file_write_failed_error,
        fs::write_failed("/dest/.gitignore", "disk full"),
        "Failed to write file",
        "disk full"
    );

    test_error_contains!(
        test_directory_read_failed_error,
        fs::read_dir_failed("/vendor", "not a directory"),
        "Failed to list directory"
    );

    test_error_contains!(
        test_config_read_failed_error,
        config::read_failed("/project/overlay.yaml", "permission denied"),
        "Failed to read configuration file",
        "/project/overlay.yaml",
        "permission denied"
    );

    test_error_contains!(
        test_config_invalid_error,
        config::invalid("ledger path must be relative"),
        "Invalid configuration",
        "ledger path must be relative"
    );

    test_error_contains!(
        test_source_not_found_error,
        source::not_found("./vendor"),
        "Source directory not found"
    );
}
