//! Single-flight cache by key
//!
//! The first caller for a key runs the fetch; every concurrent or later
//! caller for the same key awaits and shares that one outcome. Outcomes are
//! kept for the lifetime of the cache, failures included, so a key is
//! fetched at most once.

use dashmap::DashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct SingleFlight<K, V> {
    cells: DashMap<K, Arc<OnceCell<V>>>,
}

impl<K, V> Default for SingleFlight<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            cells: DashMap::new(),
        }
    }
}

impl<K, V> SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            cells: DashMap::new(),
        }
    }

    /// Value for `key`, running `fetch` only if no caller did before.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        // The map guard must be released before awaiting
        let cell = Arc::clone(self.cells.entry(key).or_default().value());
        cell.get_or_init(fetch).await.clone()
    }

    /// Settled value for `key`, without waiting or fetching.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.cells.get(key).and_then(|cell| cell.get().cloned())
    }

    pub fn is_settled(&self, key: &K) -> bool {
        self.cells.get(key).is_some_and(|cell| cell.initialized())
    }

    /// Number of keys ever requested
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
