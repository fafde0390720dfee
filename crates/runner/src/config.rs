//! Runner configuration
//!
//! One JSON document with a section per layer:
//!
//! ```json
//! {
//!   "gateway": { "api_root": "https://tsosi.org/api/", "static_root": "https://tsosi.org/" },
//!   "refdata": { "shuffle_seed": 42 }
//! }
//! ```
//!
//! Environment overrides: `TSOSI_API_ROOT`, `TSOSI_STATIC_ROOT`,
//! `TSOSI_SHUFFLE_SEED`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tsosi_gateway::{ConfigError, GatewayConfig};
use tsosi_refdata::RefDataConfig;

pub const ENV_SHUFFLE_SEED: &str = "TSOSI_SHUFFLE_SEED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub refdata: RefDataConfig,
}

impl RunnerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        self.gateway = self.gateway.with_overrides(&lookup);
        if let Some(seed) = lookup(ENV_SHUFFLE_SEED) {
            let parsed = seed.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SHUFFLE_SEED.to_string(),
                value: seed.clone(),
            })?;
            self.refdata.shuffle_seed = Some(parsed);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default() {
        let config = RunnerConfig::from_json(r#"{"refdata": {"shuffle_seed": 42}}"#).unwrap();
        assert_eq!(config.gateway, GatewayConfig::default());
        assert_eq!(config.refdata.shuffle_seed, Some(42));
    }

    #[test]
    fn test_env_overrides() {
        let config = RunnerConfig::default()
            .with_overrides(|key| match key {
                ENV_SHUFFLE_SEED => Some("7".to_string()),
                "TSOSI_API_ROOT" => Some("https://tsosi.org/api/".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.refdata, RefDataConfig::seeded(7));
        assert_eq!(config.gateway.api_root, "https://tsosi.org/api/");
    }

    #[test]
    fn test_invalid_seed() {
        let err = RunnerConfig::default()
            .with_overrides(|key| (key == ENV_SHUFFLE_SEED).then(|| "seven".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { value, .. } if value == "seven"));
    }

    #[test]
    fn test_missing_file() {
        let err = RunnerConfig::from_file("/nonexistent/tsosi.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
