//! Thread-safe append-once collection
//!
//! A [`OnceMap`] accepts at most one value per key. The first writer for a
//! key commits its value; every later writer gets the committed value back
//! and decides for itself what a disagreement means.

use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Sparse map where each key is written once and then only read
#[derive(Debug)]
pub struct OnceMap<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K, V> OnceMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Commit `value` for `key` unless a value is already present.
    ///
    /// Returns the committed value together with `true` if this call was
    /// the one that inserted it.
    pub fn commit(&self, key: K, value: V) -> (V, bool) {
        if let Some(existing) = self.inner.read().get(&key) {
            return (existing.clone(), false);
        }

        // Another writer may have won between the read and the write lock.
        let mut map = self.inner.write();
        match map.get(&key) {
            Some(existing) => (existing.clone(), false),
            None => {
                map.insert(key, value.clone());
                (value, true)
            }
        }
    }

    /// Get the committed value for a key (cloned)
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    /// All committed keys in ascending order
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for OnceMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
