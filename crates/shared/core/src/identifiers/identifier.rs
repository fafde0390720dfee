use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace of an external identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Registry {
    #[serde(rename = "ror")]
    Ror,
    #[serde(rename = "wikidata")]
    Wikidata,
    /// Identifiers minted by TSOSI itself
    #[serde(rename = "_custom", alias = "custom")]
    Custom,
}

impl Registry {
    pub const ALL: [Registry; 3] = [Registry::Ror, Registry::Wikidata, Registry::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Registry::Ror => "ror",
            Registry::Wikidata => "wikidata",
            Registry::Custom => "_custom",
        }
    }

    /// Public page of `value` in this registry, if it has one
    pub fn url_for(&self, value: &str) -> Option<String> {
        match self {
            Registry::Ror => Some(format!("https://ror.org/{value}")),
            Registry::Wikidata => Some(format!("https://wikidata.org/wiki/{value}")),
            Registry::Custom => None,
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External identifier of an entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub registry: Registry,
    pub value: String,
}

impl Identifier {
    pub fn new(registry: Registry, value: impl Into<String>) -> Self {
        Self {
            registry,
            value: value.into(),
        }
    }

    pub fn ror(value: impl Into<String>) -> Self {
        Self::new(Registry::Ror, value)
    }

    pub fn wikidata(value: impl Into<String>) -> Self {
        Self::new(Registry::Wikidata, value)
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self::new(Registry::Custom, value)
    }

    pub fn url(&self) -> Option<String> {
        self.registry.url_for(&self.value)
    }
}
