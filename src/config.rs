//! Configuration for the dataset builder.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration: where each pipeline reads from and writes to.
///
/// The defaults mirror the fixed paths the recordings ship with, so running
/// the builder from a directory containing `adlnormal/` and
/// `sportsdata/data/` needs no configuration at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory of tab-separated activity event logs
    pub activity_dir: PathBuf,

    /// Output store for the activity dataset
    pub activity_store: PathBuf,

    /// Root of the motion segment tree
    pub motion_dir: PathBuf,

    /// Output store for the normalized gyroscope dataset
    pub gyroscope_store: PathBuf,

    /// Output store for the normalized accelerometer dataset
    pub accelerometer_store: PathBuf,

    /// Whether to write a JSON build report next to each store
    pub write_reports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activity_dir: PathBuf::from("adlnormal"),
            activity_store: PathBuf::from("CASAS_adlnormal_dataset.npz"),
            motion_dir: PathBuf::from("sportsdata/data"),
            gyroscope_store: PathBuf::from("sports_data_gyroscope.npz"),
            accelerometer_store: PathBuf::from("sports_data_accelerometer.npz"),
            write_reports: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("har-datasets")
            .join("config.json")
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.activity_dir, PathBuf::from("adlnormal"));
        assert_eq!(config.motion_dir, PathBuf::from("sportsdata/data"));
        assert!(config.write_reports);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config {
            activity_dir: PathBuf::from("/data/logs"),
            write_reports: false,
            ..Config::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.activity_dir, PathBuf::from("/data/logs"));
        assert!(!back.write_reports);
    }
}
