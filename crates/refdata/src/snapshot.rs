//! Immutable reference-data snapshots
//!
//! A `RefTable` is built once from the fetched records and never mutated
//! afterwards. Records are held in `Arc` so every consumer shares the same
//! object; iteration follows the order the API returned the records in.

use indexmap::{Equivalent, IndexMap};
use std::hash::Hash;
use std::sync::Arc;

#[derive(Debug)]
pub struct RefTable<K, V> {
    items: IndexMap<K, Arc<V>>,
}

impl<K, V> RefTable<K, V>
where
    K: Hash + Eq,
{
    pub fn empty() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Build from `(key, record)` pairs. A repeated key keeps the last
    /// record at the position of the first.
    pub fn from_records(records: impl IntoIterator<Item = (K, V)>) -> Self {
        let items = records
            .into_iter()
            .map(|(key, value)| (key, Arc::new(value)))
            .collect();
        Self { items }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Arc<V>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.items.get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Arc<V>)> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<V>> {
        self.items.values()
    }
}

impl<K, V> FromIterator<(K, V)> for RefTable<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_api_order() {
        let table: RefTable<String, u32> = [("b", 2), ("a", 1), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(table.get("a").map(|v| **v), Some(1));
        assert!(table.contains("c"));
        assert!(!table.contains("d"));
    }

    #[test]
    fn test_shared_records() {
        let table = RefTable::from_records([("EUR".to_string(), "Euro".to_string())]);
        let first = table.get("EUR").unwrap().clone();
        let second = table.get("EUR").unwrap().clone();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let table = RefTable::from_records([(1, "first"), (2, "other"), (1, "second")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&1).map(|v| **v), Some("second"));
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
