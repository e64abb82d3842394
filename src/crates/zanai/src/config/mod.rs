//! Server configuration for zanai-server
//!
//! Loads and parses the zanai-server.toml configuration file with server,
//! database, and completion-provider settings. Every section has defaults so
//! the server also boots with no config file present.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::execution::ExecutionSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(toml::de::Error),
}

/// Server identification and bind configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Server name for identification (displayed to clients)
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_server_name() -> String {
    "zanai-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    /// SQLite database file path
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "zanai.db".to_string()
}

/// Completion provider configuration
///
/// The API key itself is never stored in the file; `api_key_env` names the
/// environment variable holding it. A missing or blank key disables the
/// provider, so every run takes the simulated path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSection {
    #[serde(default = "default_llm_enabled")]
    pub enabled: bool,
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_llm_api_key_env")]
    pub api_key_env: String,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            enabled: default_llm_enabled(),
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            max_tokens: default_llm_max_tokens(),
            timeout_secs: default_llm_timeout_secs(),
            api_key_env: default_llm_api_key_env(),
        }
    }
}

fn default_llm_enabled() -> bool {
    true
}

fn default_llm_base_url() -> String {
    "https://api.z.ai/v1".to_string()
}

fn default_llm_model() -> String {
    "glm-4.5-flash".to_string()
}

fn default_llm_temperature() -> f32 {
    0.7
}

fn default_llm_max_tokens() -> usize {
    2000
}

fn default_llm_timeout_secs() -> u64 {
    30
}

fn default_llm_api_key_env() -> String {
    "ZAI_API_KEY".to_string()
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub llm: LlmSection,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadError)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::ParseError)
    }

    /// Load configuration from the default locations
    ///
    /// Searches:
    /// 1. CONFIG_PATH environment variable
    /// 2. ./config/zanai-server.toml
    /// 3. ./zanai-server.toml
    ///
    /// Falls back to defaults when no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(config_path) = std::env::var("CONFIG_PATH") {
            return Self::from_file(config_path);
        }

        let paths = [
            PathBuf::from("config/zanai-server.toml"),
            PathBuf::from("./zanai-server.toml"),
        ];
        for path in &paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Get database URL from configuration
    pub fn database_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.database.path)
    }

    /// Read the provider API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Execution settings derived from the llm section
    pub fn execution_settings(&self) -> ExecutionSettings {
        ExecutionSettings {
            temperature: self.llm.temperature,
            max_tokens: self.llm.max_tokens,
            timeout: Duration::from_secs(self.llm.timeout_secs),
        }
    }
}
