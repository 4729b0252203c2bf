//! Client configuration.
//!
//! Stored as YAML in the platform config directory; every field has a
//! default so a missing file just means defaults. `HELPDESK_API_URL`
//! overrides the configured endpoint, which keeps scripted use simple.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/tickets";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tickets collection endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long notifications stay up, in milliseconds.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_toast_duration_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "helpdesk").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Loads the config file if present, applies env overrides, falls back
    /// to defaults.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_yaml_ng::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(url) = env::var("HELPDESK_API_URL")
            && !url.is_empty()
        {
            config.api_url = url;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
