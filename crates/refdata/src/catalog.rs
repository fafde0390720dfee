//! Entity catalog: the entity table and its identifier index, built together

use std::sync::Arc;
use tsosi_core::{Entity, EntityId};

use crate::resolver::IdentifierIndex;
use crate::snapshot::RefTable;

/// Entities keyed by ID, plus the identifier index pointing into them
///
/// Both halves are built in one pass over the same records, so every ID the
/// index hands out names an entity of the table.
#[derive(Debug)]
pub struct EntityCatalog {
    entities: RefTable<EntityId, Entity>,
    identifiers: IdentifierIndex,
}

impl EntityCatalog {
    pub fn build(records: impl IntoIterator<Item = Entity>) -> Self {
        let mut identifiers = IdentifierIndex::new();
        let entities = records
            .into_iter()
            .map(|entity| {
                for identifier in &entity.identifiers {
                    identifiers.insert(identifier.registry, identifier.value.clone(), entity.id);
                }
                (entity.id, entity)
            })
            .collect();

        Self {
            entities,
            identifiers,
        }
    }

    pub fn empty() -> Self {
        Self {
            entities: RefTable::empty(),
            identifiers: IdentifierIndex::new(),
        }
    }

    pub fn entities(&self) -> &RefTable<EntityId, Entity> {
        &self.entities
    }

    pub fn identifiers(&self) -> &IdentifierIndex {
        &self.identifiers
    }

    pub fn get(&self, id: &EntityId) -> Option<&Arc<Entity>> {
        self.entities.get(id)
    }

    /// Entity behind any supported identifier
    pub fn resolve(&self, id: &str) -> Option<&Arc<Entity>> {
        self.identifiers
            .resolve(id)
            .and_then(|entity_id| self.entities.get(&entity_id))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsosi_core::Identifier;
    use uuid::Uuid;

    #[test]
    fn test_index_points_into_table() {
        let catalog = EntityCatalog::build([
            Entity::new(Uuid::from_u128(1), "OpenEdition")
                .with_identifier(Identifier::ror("012abc345"))
                .with_identifier(Identifier::wikidata("Q3355512")),
            Entity::new(Uuid::from_u128(2), "DOAJ").with_identifier(Identifier::custom("doaj")),
            Entity::new(Uuid::from_u128(3), "Unregistered"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.identifiers().len(), 3);
        for entity_id in catalog.identifiers().entity_ids() {
            assert!(catalog.get(entity_id).is_some());
        }
        assert_eq!(
            catalog.resolve("Q3355512").map(|e| e.name.as_str()),
            Some("OpenEdition")
        );
        assert_eq!(catalog.resolve("doaj").map(|e| e.id), Some(Uuid::from_u128(2)));
    }

    #[test]
    fn test_resolve_unknown_uuid() {
        let catalog = EntityCatalog::empty();
        assert!(catalog.is_empty());
        // The UUID rule accepts it, but no entity is cached under it
        assert!(catalog
            .resolve("6f1c2b8e-0a57-4d43-9a4b-3c0e5b3f1a22")
            .is_none());
    }
}
