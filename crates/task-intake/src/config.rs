/*
[INPUT]:  YAML configuration file (optional) and CLI overrides
[OUTPUT]: Parsed application configuration and a configured TaskClient
[POS]:    Configuration layer - backend endpoint and client settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use task_intake_client::TaskClient;
use task_intake_client::http::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CREATE_TASK_PATH};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Backend endpoint settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Task backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend root, e.g. "http://localhost:3000"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the create-task endpoint
    #[serde(default = "default_create_task_path")]
    pub create_task_path: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            create_task_path: default_create_task_path(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_create_task_path() -> String {
    DEFAULT_CREATE_TASK_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Explicit path if given, else the per-user file if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "using per-user config");
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    /// Build the HTTP client described by this configuration
    pub fn client(&self) -> Result<TaskClient> {
        let client = TaskClient::with_config_and_base_url(self.client_config(), &self.api.base_url)
            .with_context(|| format!("create task client for {}", self.api.base_url))?;
        Ok(client.with_create_task_path(self.api.create_task_path.clone()))
    }
}

/// `<config dir>/task-intake/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("task-intake").join("config.yaml"))
}
