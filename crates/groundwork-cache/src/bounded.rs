//! # Size-Bounded Cache
//!
//! Least-recently-used eviction at a fixed capacity, backed by the `lru`
//! crate. Reads refresh recency; inserting into a full cache evicts the
//! least recently used entry.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::debug;

use crate::{Cache, CacheError};

/// Cache holding at most `capacity` entries, evicting the least recently
/// used entry on overflow.
pub struct BoundedCache<K: Eq + Hash, V> {
    entries: LruCache<K, V>,
}

impl<K: Eq + Hash, V> BoundedCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`CacheError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            entries: LruCache::new(capacity),
        })
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Most-recently-used first iteration over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, V> Cache<K, V> for BoundedCache<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        // Replacing an existing key must not evict anything else.
        if self.entries.contains(&key) {
            return self.entries.put(key, value);
        }

        let evicted = if self.entries.len() == self.capacity() {
            self.entries.pop_lru().map(|(_, victim)| {
                debug!("LRU entry evicted at capacity");
                victim
            })
        } else {
            None
        };
        self.entries.put(key, value);
        evicted
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.pop(key)
    }

    fn contains(&mut self, key: &K) -> bool {
        self.entries.contains(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
