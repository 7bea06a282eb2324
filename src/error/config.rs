//! Configuration errors

use super::OverlayError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> OverlayError {
    OverlayError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> OverlayError {
    OverlayError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> OverlayError {
    OverlayError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
