//! Identifier resolution
//!
//! Maps external identifiers (ROR, Wikidata, custom) to entity IDs. The index
//! is built while the entity catalog is loaded; `resolve` classifies the
//! incoming string with the ordered identifier rules and looks it up in the
//! registry the first matching rule names. A miss is final: there is no
//! fallthrough to the next rule.

use log::warn;
use std::collections::HashMap;
use tsosi_core::{EntityId, IdentifierKind, IdentifierRules, Registry};
use uuid::Uuid;

/// Per-registry `value -> entity` index
#[derive(Debug, Default, Clone)]
pub struct IdentifierIndex {
    ror: HashMap<String, EntityId>,
    wikidata: HashMap<String, EntityId>,
    custom: HashMap<String, EntityId>,
    collisions: usize,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self, registry: Registry) -> &HashMap<String, EntityId> {
        match registry {
            Registry::Ror => &self.ror,
            Registry::Wikidata => &self.wikidata,
            Registry::Custom => &self.custom,
        }
    }

    fn registry_mut(&mut self, registry: Registry) -> &mut HashMap<String, EntityId> {
        match registry {
            Registry::Ror => &mut self.ror,
            Registry::Wikidata => &mut self.wikidata,
            Registry::Custom => &mut self.custom,
        }
    }

    /// Map `(registry, value)` to `entity`. A later entity claiming the
    /// same value replaces the earlier one; the collision is logged.
    pub fn insert(&mut self, registry: Registry, value: impl Into<String>, entity: EntityId) {
        let value = value.into();
        if let Some(previous) = self.registry_mut(registry).insert(value.clone(), entity) {
            if previous != entity {
                warn!(
                    "Identifier {}:{} claimed by {} and {}, keeping {}",
                    registry, value, previous, entity, entity
                );
                self.collisions += 1;
            }
        }
    }

    /// Entity registered under `(registry, value)`
    pub fn lookup(&self, registry: Registry, value: &str) -> Option<EntityId> {
        self.registry(registry).get(value).copied()
    }

    /// Resolve with the standard rules: UUID, ROR, Wikidata, then custom.
    pub fn resolve(&self, id: &str) -> Option<EntityId> {
        self.resolve_with(IdentifierRules::standard(), id)
    }

    pub fn resolve_with(&self, rules: &IdentifierRules, id: &str) -> Option<EntityId> {
        match rules.classify(id) {
            IdentifierKind::EntityId => Uuid::parse_str(id).ok(),
            IdentifierKind::Registry(registry) => self.lookup(registry, id),
        }
    }

    /// Number of values that were claimed by more than one entity
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn len(&self) -> usize {
        self.ror.len() + self.wikidata.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every indexed entity ID, with repeats
    pub fn entity_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.ror
            .values()
            .chain(self.wikidata.values())
            .chain(self.custom.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> EntityId {
        Uuid::from_u128(n)
    }

    fn sample_index() -> IdentifierIndex {
        let mut index = IdentifierIndex::new();
        index.insert(Registry::Ror, "012abc345", id(1));
        index.insert(Registry::Wikidata, "Q42", id(2));
        index.insert(Registry::Custom, "doaj", id(3));
        index
    }

    #[test]
    fn test_resolve_by_registry() {
        let index = sample_index();
        assert_eq!(index.resolve("012abc345"), Some(id(1)));
        assert_eq!(index.resolve("Q42"), Some(id(2)));
        assert_eq!(index.resolve("doaj"), Some(id(3)));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_uuid_returned_as_is() {
        let index = IdentifierIndex::new();
        let uuid = "6f1c2b8e-0a57-4d43-9a4b-3c0e5b3f1a22";
        assert_eq!(index.resolve(uuid), Some(Uuid::parse_str(uuid).unwrap()));
    }

    #[test]
    fn test_unknown_is_none() {
        let index = sample_index();
        assert_eq!(index.resolve("not-a-known-id"), None);
        assert_eq!(index.resolve(""), None);
    }

    #[test]
    fn test_no_fallthrough_on_miss() {
        // A custom identifier that looks like a Wikidata ID is never found:
        // the Wikidata rule matches first and its lookup misses.
        let mut index = IdentifierIndex::new();
        index.insert(Registry::Custom, "Q7", id(9));
        assert_eq!(index.resolve("Q7"), None);
        assert_eq!(index.lookup(Registry::Custom, "Q7"), Some(id(9)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut index = IdentifierIndex::new();
        index.insert(Registry::Ror, "012abc345", id(1));
        index.insert(Registry::Ror, "012abc345", id(2));
        assert_eq!(index.resolve("012abc345"), Some(id(2)));
        assert_eq!(index.collisions(), 1);

        // Re-inserting the same mapping is not a collision
        index.insert(Registry::Ror, "012abc345", id(2));
        assert_eq!(index.collisions(), 1);
    }

    #[test]
    fn test_same_value_in_different_registries() {
        let mut index = IdentifierIndex::new();
        index.insert(Registry::Custom, "012abc345", id(1));
        index.insert(Registry::Ror, "012abc345", id(2));
        assert_eq!(index.collisions(), 0);
        assert_eq!(index.resolve("012abc345"), Some(id(2)));
    }
}
