//! User-adjustable settings, read from JSON next to the quota database

use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::DEFAULT_BACKEND_URL;
use crate::quota::DEFAULT_DAILY_LIMIT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StudioConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_daily_limit() -> u32 {
    DEFAULT_DAILY_LIMIT
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            daily_limit: default_daily_limit(),
        }
    }
}

impl StudioConfig {
    /// Loads the config, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&content)?;
        info!("[config] Loaded studio config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StudioConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.daily_limit, DEFAULT_DAILY_LIMIT);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "daily_limit": 12 }"#).unwrap();

        let config = StudioConfig::load(&path).unwrap();
        assert_eq!(config.daily_limit, 12);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            StudioConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
