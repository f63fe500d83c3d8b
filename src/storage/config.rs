//! Configuration management
//!
//! Default text encoding for file reads and writes.
//! Priority: config.toml > UTILBELT_ENCODING environment variable > UTF-8

use super::Result;
use crate::error::StorageError;
use crate::utils::encoding::resolve_encoding;
use crate::utils::file::{self, DEFAULT_ENCODING};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when the config file sets no encoding.
pub const ENCODING_ENV_VAR: &str = "UTILBELT_ENCODING";

/// Library configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    /// Encoding name used by [`Config::read_file`] and [`Config::write_file`]
    pub default_encoding: Option<String>,
}

impl Config {
    /// Load configuration from file
    ///
    /// A missing file yields the default configuration. A configured encoding
    /// name that cannot be resolved fails here rather than on the first read.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;
        config.validate()?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save configuration to file, refusing encoding names that cannot be resolved
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        self.validate()?;

        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        match self.default_encoding.as_deref() {
            Some(name) if !name.trim().is_empty() => resolve_encoding(name).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("utilbelt");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Get encoding with fallback to environment variable, then UTF-8
    pub fn encoding(&self) -> String {
        self.default_encoding
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var(ENCODING_ENV_VAR).ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_ENCODING.to_string())
    }

    /// Set encoding
    pub fn set_encoding(&mut self, encoding: String) {
        self.default_encoding = Some(encoding);
    }

    /// Read a whole file using the configured encoding
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> crate::Result<String> {
        file::read_file_with_encoding(path, &self.encoding())
    }

    /// Write a file using the configured encoding
    pub fn write_file<P: AsRef<Path>>(
        &self,
        folder: P,
        file_name: &str,
        content: &str,
    ) -> crate::Result<PathBuf> {
        file::write_file_with_encoding(folder, file_name, &self.encoding(), content)
    }
}
