//! Configuration loading and persistence.
//!
//! Handles reading and writing the campuswatch configuration file. The
//! auth token is never written to disk; it is supplied via the
//! `CAMPUSWATCH_TOKEN` environment variable.

// Rust guideline compliant 2026-02

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::{fs, path::PathBuf};

/// Configuration for the campuswatch client.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// Origin of the monitoring backend (`http(s)://host[:port]`).
    pub server_url: String,
    /// Bearer token for the backend - NOT serialized to disk.
    #[serde(skip)]
    pub token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Backend dev server default; overridden per deployment.
            server_url: "http://localhost:8000".to_string(),
            token: String::new(),
        }
    }
}

impl Config {
    /// Returns the configuration directory path, creating it if necessary.
    ///
    /// Directory selection priority:
    /// 1. `CAMPUSWATCH_CONFIG_DIR` env var: explicit override
    /// 2. `CAMPUSWATCH_ENV=test`: repo `tmp/campuswatch-test`
    /// 3. Default: platform config dir (macOS: ~/Library/Application Support/campuswatch)
    pub fn config_dir() -> Result<PathBuf> {
        let dir = if let Ok(test_dir) = std::env::var("CAMPUSWATCH_CONFIG_DIR") {
            PathBuf::from(test_dir)
        } else if crate::env::is_test_mode() {
            // Tests: keep config inside the repo tree (gitignored tmp/)
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tmp/campuswatch-test")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("campuswatch")
        };
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Loads configuration from file, with environment variable overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file().unwrap_or_else(|_| Self::default());
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_from_file() -> Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            anyhow::bail!("Config file not found")
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(server_url) = std::env::var("CAMPUSWATCH_SERVER_URL") {
            self.server_url = server_url;
        }

        if let Ok(token) = std::env::var("CAMPUSWATCH_TOKEN") {
            self.token = token;
        }
    }

    /// Persists the current configuration to disk.
    ///
    /// The token is excluded from serialization and is never saved.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_dir()?.join("config.json");
        fs::write(&config_path, serde_json::to_string_pretty(self)?)?;

        // Owner read/write only
        #[cfg(unix)]
        fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600))?;

        Ok(())
    }

    /// Get the bearer token for authenticating the alert channel.
    pub fn get_api_key(&self) -> &str {
        &self.token
    }

    /// Check if a token has been supplied.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:8000");
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_config_serialization_excludes_token() {
        let mut config = Config::default();
        config.token = "secret_token".to_string();
        let json = serde_json::to_string(&config).expect("config serializes");

        // Token must never reach disk
        assert!(!json.contains("secret_token"));
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_get_api_key_returns_token() {
        let mut config = Config::default();
        config.token = "eyJhbGciOiJIUzI1NiJ9.test".to_string();
        assert_eq!(config.get_api_key(), "eyJhbGciOiJIUzI1NiJ9.test");
    }

    #[test]
    fn test_has_token() {
        let mut config = Config::default();
        assert!(!config.has_token());

        config.token = "anything".to_string();
        assert!(config.has_token());

        config.token.clear();
        assert!(!config.has_token());
    }

    #[test]
    fn test_roundtrip_preserves_server_url() {
        let config = Config {
            server_url: "https://security.campus.edu".to_string(),
            token: String::new(),
        };
        let json = serde_json::to_string(&config).expect("config serializes");
        let loaded: Config = serde_json::from_str(&json).expect("config parses");
        assert_eq!(loaded.server_url, "https://security.campus.edu");
    }
}
