//! Configuration loading for linear-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables LINEAR_API_KEY / LINEAR_API_URL
//! 2. Environment variable LINEAR_MCP_CONFIG_PATH
//! 3. ~/.binks/linear.toml
//! 4. Default values

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub linear: LinearConfig,
}

/// Linear API connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct LinearConfig {
    /// Personal API key; empty means unauthenticated
    #[serde(default)]
    pub api_key: String,
    /// GraphQL endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

// Keep the API key out of logs.
impl std::fmt::Debug for LinearConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("api_url", &self.api_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.linear.timeout_seconds == 0 {
            bail!("linear.timeout_seconds must be greater than 0");
        }
        if self.linear.connect_timeout_seconds == 0 {
            bail!("linear.connect_timeout_seconds must be greater than 0");
        }
        if self.linear.api_url.trim().is_empty() {
            bail!("linear.api_url must not be empty");
        }
        Ok(())
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment overrides; `lookup` resolves a variable name
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("LINEAR_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.linear.api_key = key;
        }
        if let Some(url) = lookup("LINEAR_API_URL").filter(|u| !u.trim().is_empty()) {
            self.linear.api_url = url;
        }
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("LINEAR_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".binks").join("linear.toml"))
    }
}
