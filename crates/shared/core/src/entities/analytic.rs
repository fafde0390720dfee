use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EntityId;

/// Pre-aggregated yearly figures for a recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytic {
    pub id: i64,
    pub recipient: EntityId,
    pub year: i32,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub data: Map<String, Value>,
}
