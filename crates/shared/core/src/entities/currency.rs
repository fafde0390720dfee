use serde::{Deserialize, Serialize};

/// ISO 4217 code (or a client-side sentinel)
pub type CurrencyCode = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyCode,
    pub name: String,
}

impl Currency {
    pub fn new(id: impl Into<CurrencyCode>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
