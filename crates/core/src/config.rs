//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the core. Nothing
//! below the binaries reads environment variables.

use crate::constants::DEFAULT_DATA_FILE;
use crate::{WardError, WardResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The data file must name a file, not a directory or an empty path.
    pub fn new(data_file: PathBuf) -> WardResult<Self> {
        if data_file.as_os_str().is_empty() {
            return Err(WardError::InvalidConfig(
                "data file path cannot be empty".into(),
            ));
        }
        if data_file.is_dir() {
            return Err(WardError::InvalidConfig(format!(
                "data file path {} is a directory",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Resolve the data file location from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_DATA_FILE`].
pub fn data_file_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_data_file_from_env_value_defaults_when_unset_or_blank() {
        assert_eq!(
            data_file_from_env_value(None),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
        assert_eq!(
            data_file_from_env_value(Some("   ".into())),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn test_data_file_from_env_value_uses_trimmed_value() {
        assert_eq!(
            data_file_from_env_value(Some(" /tmp/ward.json ".into())),
            PathBuf::from("/tmp/ward.json")
        );
    }

    #[test]
    fn test_new_rejects_empty_path_and_directories() {
        let err = CoreConfig::new(PathBuf::new()).expect_err("empty path should be rejected");
        assert!(matches!(err, WardError::InvalidConfig(msg) if msg.contains("cannot be empty")));

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = CoreConfig::new(temp_dir.path().to_path_buf())
            .expect_err("directory should be rejected");
        assert!(matches!(err, WardError::InvalidConfig(msg) if msg.contains("is a directory")));
    }

    #[test]
    fn test_new_accepts_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("wardbook.json");
        let cfg = CoreConfig::new(path.clone()).expect("CoreConfig::new should succeed");
        assert_eq!(cfg.data_file(), path.as_path());
    }
}
