use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identifiers::{Identifier, Registry};
use crate::values::{PointCoordinates, deserialize_lenient_date, parse_point_coordinates};

/// Unique identifier for an entity
pub type EntityId = Uuid;

/// Organization taking part in funding transfers (summary form)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country: Option<String>,
    /// External identifiers, in API order
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    /// WKT point
    #[serde(default)]
    pub coordinates: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_recipient: bool,
    #[serde(default)]
    pub is_partner: bool,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
            country: None,
            identifiers: Vec::new(),
            coordinates: None,
            logo: None,
            icon: None,
            is_recipient: false,
            is_partner: false,
        }
    }

    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifiers.push(identifier);
        self
    }

    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    pub fn recipient(mut self) -> Self {
        self.is_recipient = true;
        self
    }

    pub fn partner(mut self) -> Self {
        self.is_partner = true;
        self
    }

    /// Short name when available, full name otherwise
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    /// First identifier held in `registry`
    pub fn identifier(&self, registry: Registry) -> Option<&Identifier> {
        self.identifiers.iter().find(|id| id.registry == registry)
    }

    pub fn point(&self) -> Option<PointCoordinates> {
        parse_point_coordinates(self.coordinates.as_deref())
    }
}

/// Infrastructure-specific details of a recipient entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureDetails {
    #[serde(default)]
    pub infra_finder_url: Option<String>,
    #[serde(default)]
    pub posi_url: Option<String>,
    #[serde(default)]
    pub support_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date_scoss_start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date_scoss_end: Option<NaiveDate>,
    #[serde(default)]
    pub legal_entity_description: Option<String>,
    /// Transfer amounts of this infrastructure must not be displayed
    #[serde(default)]
    pub hide_amount: bool,
}

/// Full entity record, as served by the entity detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetails {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date_inception: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
    #[serde(default)]
    pub wikipedia_extract: Option<String>,
    #[serde(default)]
    pub infrastructure: Option<InfrastructureDetails>,
    #[serde(default)]
    pub is_emitter: bool,
    #[serde(default)]
    pub is_agent: bool,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date_data_update: Option<NaiveDate>,
}

impl EntityDetails {
    pub fn hides_amounts(&self) -> bool {
        self.infrastructure
            .as_ref()
            .is_some_and(|infra| infra.hide_amount)
    }
}
