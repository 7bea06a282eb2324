//! Overlay configuration (overlay.yaml)
//!
//! The file is optional and lives in the destination root unless a path is
//! given explicitly. Every key has a default.
//!
//! ```yaml
//! ledger: .gitignore
//! append: true
//! ignore_directories:
//!   - lib/Zend
//! excludes:
//!   - .git
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{OverlayError, Result};
use crate::error::config::{invalid, parse_failed, read_failed};

/// Config filename looked up in the destination root
pub const CONFIG_FILE: &str = "overlay.yaml";

/// Default ledger filename
pub const DEFAULT_LEDGER_FILE: &str = ".gitignore";

/// Overlay settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Ledger path, relative to the destination
    pub ledger: PathBuf,

    /// Keep entries already present in the ledger file
    pub append: bool,

    /// Directories recorded as a whole instead of file by file
    pub ignore_directories: Vec<String>,

    /// Source paths that are never installed
    pub excludes: Vec<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            ledger: PathBuf::from(DEFAULT_LEDGER_FILE),
            append: true,
            ignore_directories: Vec::new(),
            excludes: vec![".git".to_string()],
        }
    }
}

impl OverlayConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a destination.
    ///
    /// An explicit `path` must exist. Without one, `overlay.yaml` in the
    /// destination is used if present, defaults otherwise.
    pub fn load(destination: &Path, path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = destination.join(CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            OverlayError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Absolute ledger location for a destination
    pub fn ledger_path(&self, destination: &Path) -> PathBuf {
        destination.join(&self.ledger)
    }

    fn validate(&self) -> Result<()> {
        if self.ledger.as_os_str().is_empty() {
            return Err(invalid("ledger path must not be empty"));
        }
        if self.ledger.is_absolute() {
            return Err(invalid(format!(
                "ledger path must be relative to the destination: {}",
                self.ledger.display()
            )));
        }
        if self.ignore_directories.iter().any(|d| d.trim_matches('/').is_empty()) {
            return Err(invalid("ignore_directories entries must not be empty"));
        }
        if self.excludes.iter().any(|e| e.trim_matches('/').is_empty()) {
            return Err(invalid("excludes entries must not be empty"));
        }
        Ok(())
    }
}
