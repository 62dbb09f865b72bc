//! Configuration management module
//!
//! Handles loading, saving, and validation of run parameters. The CLI takes
//! only the target file name; block size and seek count come from this
//! configuration, defaulting to the historical constants.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    DiskMarkError, Result, APP_NAME, CONFIG_FILE, DEFAULT_BLOCK_SIZE, DEFAULT_SEEK_COUNT,
    WRITE_PAYLOAD_BYTES,
};

pub mod persistence;

/// Run configuration for the three measurement stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Block size for write and read I/O calls (in bytes)
    pub block_size: usize,
    /// Number of random seeks performed by the seek stage
    pub seek_count: u64,
    /// Whether completed runs are appended to the run history
    pub save_history: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            seek_count: DEFAULT_SEEK_COUNT,
            save_history: true,
        }
    }
}

impl RunConfig {
    /// Create a new configuration with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(DiskMarkError::ConfigError(
                "Block size must be greater than 0".to_string(),
            ));
        }

        // A block larger than the payload would make the write loop a no-op
        if self.block_size as u64 > WRITE_PAYLOAD_BYTES {
            return Err(DiskMarkError::ConfigError(format!(
                "Block size too large: {} bytes (max: {} bytes)",
                self.block_size, WRITE_PAYLOAD_BYTES
            )));
        }

        Ok(())
    }

    /// Set the block size for write and read I/O calls
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Set the number of random seeks
    pub fn with_seek_count(mut self, count: u64) -> Self {
        self.seek_count = count;
        self
    }

    /// Set whether runs are appended to the run history
    pub fn with_save_history(mut self, save: bool) -> Self {
        self.save_history = save;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            DiskMarkError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DiskMarkError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(&config_path, content).map_err(|e| {
            DiskMarkError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/diskmark/diskmark.toml or the platform equivalent
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            DiskMarkError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_historical_constants() {
        let config = RunConfig::default();
        assert_eq!(config.block_size, 1028);
        assert_eq!(config.seek_count, 100_000);
        assert!(config.save_history);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_block_size() {
        let config = RunConfig::default().with_block_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_block() {
        let config = RunConfig::default().with_block_size(WRITE_PAYLOAD_BYTES as usize + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let config = RunConfig::default()
            .with_block_size(4096)
            .with_seek_count(500)
            .with_save_history(false);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: RunConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_toml_errors_convert_to_config_error() {
        let de_err = toml::from_str::<RunConfig>("block_size = \"large\"").unwrap_err();
        assert!(matches!(
            DiskMarkError::from(de_err),
            DiskMarkError::ConfigError(_)
        ));
    }

    #[test]
    fn test_config_file_path() {
        let path = RunConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("diskmark"));
        assert!(path.to_string_lossy().contains("diskmark.toml"));
    }
}
