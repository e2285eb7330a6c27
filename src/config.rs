//! Download root configuration.
//!
//! The root directory comes from a single environment variable. It must name
//! an existing directory; per-airport subdirectories are created on demand by
//! the download pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Environment variable naming the directory charts are saved under.
pub const DOWNLOAD_PATH_ENV_VAR: &str = "FAA_CHARTS_DOWNLOAD_PATH";

/// Errors produced while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is unset or blank.
    #[error("Environment variable '{name}' missing\n  Suggestion: set it to the directory charts should be saved in")]
    MissingVariable {
        /// The environment variable name.
        name: &'static str,
    },

    /// The variable points somewhere that is not a directory.
    #[error("Path specified by environment variable '{name}' doesn't exist: {path}")]
    MissingDirectory {
        /// The environment variable name.
        name: &'static str,
        /// The configured path.
        path: PathBuf,
    },
}

/// Validated root directory for downloaded charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRoot(PathBuf);

impl DownloadRoot {
    /// Loads the download root from [`DOWNLOAD_PATH_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is missing or does not name an
    /// existing directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(DOWNLOAD_PATH_ENV_VAR).ok())
    }

    /// Validates a raw configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] for `None` or a blank value and
    /// [`ConfigError::MissingDirectory`] when the path is not a directory.
    pub fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVariable {
                name: DOWNLOAD_PATH_ENV_VAR,
            })?;

        let path = PathBuf::from(value);
        if !path.is_dir() {
            return Err(ConfigError::MissingDirectory {
                name: DOWNLOAD_PATH_ENV_VAR,
                path,
            });
        }

        debug!(path = %path.display(), "download root configured");
        Ok(Self(path))
    }

    /// Returns the root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_download_root_missing_value() {
        let err = DownloadRoot::from_value(None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariable {
                name: DOWNLOAD_PATH_ENV_VAR
            }
        );
        assert!(err.to_string().contains(DOWNLOAD_PATH_ENV_VAR));
    }

    #[test]
    fn test_download_root_blank_value_is_missing() {
        let err = DownloadRoot::from_value(Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable { .. }));
    }

    #[test]
    fn test_download_root_nonexistent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = DownloadRoot::from_value(Some(missing.display().to_string())).unwrap_err();
        match err {
            ConfigError::MissingDirectory { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected MissingDirectory, got: {other:?}"),
        }
    }

    #[test]
    fn test_download_root_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, b"x").unwrap();
        let result = DownloadRoot::from_value(Some(file.display().to_string()));
        assert!(matches!(result, Err(ConfigError::MissingDirectory { .. })));
    }

    #[test]
    fn test_download_root_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = DownloadRoot::from_value(Some(temp_dir.path().display().to_string())).unwrap();
        assert_eq!(root.path(), temp_dir.path());
    }
}
