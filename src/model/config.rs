//! Client configuration from environment and optional YAML file

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

const ENV_API_KEY: &str = "GEMINI_API_KEY";
const ENV_CONFIG_PATH: &str = "SINTASCAN_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "sintascan.yaml";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Client configuration for the model API.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Build a configuration with the default model and endpoint.
    ///
    /// An empty credential is rejected here so that no call is ever issued
    /// without one.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Load configuration from the environment and an optional config file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(ENV_API_KEY))?;

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = Self::load_config_file(Path::new(&config_path)).unwrap_or_default();

        Ok(Self {
            api_key,
            model: file.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: file.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Load overrides from a YAML file, falling back to defaults on any
    /// problem.
    fn load_config_file(path: &Path) -> Option<ConfigFile> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(Config::new("  "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn new_applies_defaults() {
        let config = Config::new("test-key").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn config_file_overrides_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model: gemini-2.0-pro").unwrap();

        let loaded = Config::load_config_file(file.path()).unwrap();
        assert_eq!(loaded.model.as_deref(), Some("gemini-2.0-pro"));
        assert!(loaded.base_url.is_none());
    }

    #[test]
    fn empty_config_file_yields_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let loaded = Config::load_config_file(file.path()).unwrap();
        assert!(loaded.model.is_none());
    }

    #[test]
    fn malformed_config_file_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model: [unclosed").unwrap();
        assert!(Config::load_config_file(file.path()).is_none());
    }
}
