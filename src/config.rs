// Lab configuration - optional RON file tuning the demonstration scenarios

use crate::command::manager::DEFAULT_MAX_HISTORY;
use crate::command::remote::DEFAULT_SLOTS;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "PATTERN_LAB_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Settings shared by every scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Maximum commands kept by the order history
    pub history_limit: usize,
    /// Number of on/off slot pairs on the remote control
    pub remote_slots: usize,
    /// Token the auth decorator accepts
    pub auth_token: String,
    /// Print narration to stdout while scenarios run
    pub echo: bool,
    /// Seed for the shuffled playlist; random when absent
    pub shuffle_seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_MAX_HISTORY,
            remote_slots: DEFAULT_SLOTS,
            auth_token: "SECRET123".to_string(),
            echo: true,
            shuffle_seed: None,
        }
    }
}

impl LabConfig {
    /// Load from a RON file; fields missing from the file keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(to_string_pretty(self, PrettyConfig::default())?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load the file named by `PATTERN_LAB_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabConfig::default();
        assert_eq!(config.history_limit, 100);
        assert_eq!(config.remote_slots, 7);
        assert_eq!(config.auth_token, "SECRET123");
        assert!(config.echo);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = LabConfig::from_ron("(remote_slots: 3, shuffle_seed: Some(9))").unwrap();
        assert_eq!(config.remote_slots, 3);
        assert_eq!(config.shuffle_seed, Some(9));
        assert_eq!(config.history_limit, 100);
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let err = LabConfig::from_ron("(remote_slots: \"many\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_ron_text_round_trip() {
        let config = LabConfig {
            echo: false,
            ..LabConfig::default()
        };
        let text = config.to_ron().unwrap();
        assert_eq!(LabConfig::from_ron(&text).unwrap(), config);
    }
}
