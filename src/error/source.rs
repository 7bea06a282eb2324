//! Source tree errors

use super::OverlayError;

/// Creates a source not found error
pub fn not_found(path: impl Into<String>) -> OverlayError {
    OverlayError::SourceNotFound { path: path.into() }
}
