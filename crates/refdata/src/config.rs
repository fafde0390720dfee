//! Reference-data store configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefDataConfig {
    /// Seed of the infrastructures shuffle. `None` draws from entropy, so
    /// the order differs between processes.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl RefDataConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            shuffle_seed: Some(seed),
        }
    }
}
