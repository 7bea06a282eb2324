//! File system errors

use std::path::Path;

use super::OverlayError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> OverlayError {
    OverlayError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> OverlayError {
    OverlayError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory listing error
pub fn read_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> OverlayError {
    OverlayError::DirectoryReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a removal error
pub fn remove_failed(path: impl Into<String>, reason: impl Into<String>) -> OverlayError {
    OverlayError::RemoveFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub(crate) fn read_error(path: &Path, e: &std::io::Error) -> OverlayError {
    read_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn write_error(path: &Path, e: &std::io::Error) -> OverlayError {
    write_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn read_dir_error(path: &Path, e: &std::io::Error) -> OverlayError {
    read_dir_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn remove_error(path: &Path, e: &std::io::Error) -> OverlayError {
    remove_failed(path.display().to_string(), e.to_string())
}
