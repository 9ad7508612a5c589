//! Path management for SaveSmart
//!
//! ## Path Resolution Order
//!
//! 1. `SAVESMART_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `savesmart`
//!    (`~/.config/savesmart` on Linux, `%APPDATA%\savesmart\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SaveSmartError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SAVESMART_DATA_DIR";

/// Manages all paths used by SaveSmart
#[derive(Debug, Clone)]
pub struct SaveSmartPaths {
    base_dir: PathBuf,
}

impl SaveSmartPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SaveSmartError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "savesmart")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SaveSmartError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the onboarding draft
    pub fn draft_file(&self) -> PathBuf {
        self.data_dir().join("onboarding.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SaveSmartError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaveSmartError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SaveSmartError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaveSmartPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.draft_file(),
            temp_dir.path().join("data").join("onboarding.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaveSmartPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
