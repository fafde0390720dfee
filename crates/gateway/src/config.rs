//! Gateway configuration
//!
//! Loaded from JSON, then optionally overridden from the environment:
//! - `TSOSI_API_ROOT`     root of the JSON API
//! - `TSOSI_STATIC_ROOT`  root the static data files are served from

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const ENV_API_ROOT: &str = "TSOSI_API_ROOT";
pub const ENV_STATIC_ROOT: &str = "TSOSI_STATIC_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Root of the JSON API
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Root of the static data (country list, flags)
    #[serde(default = "default_static_root")]
    pub static_root: String,
}

fn default_api_root() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_static_root() -> String {
    "http://localhost:5173/".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            static_root: default_static_root(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(root) = lookup(ENV_API_ROOT) {
            self.api_root = root;
        }
        if let Some(root) = lookup(ENV_STATIC_ROOT) {
            self.static_root = root;
        }
        self
    }

    pub fn api_url(&self) -> Result<Url, ConfigError> {
        parse_root("api_root", &self.api_root)
    }

    pub fn static_url(&self) -> Result<Url, ConfigError> {
        parse_root("static_root", &self.static_root)
    }
}

/// Parse a root URL, making sure relative joins append to it
fn parse_root(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let normalized = if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    };
    Url::parse(&normalized).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })
}
