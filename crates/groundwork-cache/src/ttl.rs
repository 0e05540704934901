//! # Time-Bounded Cache
//!
//! Entries are valid for a fixed duration after insertion. Expired
//! entries are invisible to every read path and are garbage-collected
//! opportunistically: writes trigger a sweep at most once per sweep
//! interval, which bounds memory without a background task.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::Cache;

/// A cached value and its insertion time.
#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Cache whose entries expire a fixed `ttl` after insertion.
///
/// Re-inserting a key resets its clock. `len` counts live entries only,
/// so it is O(n).
#[derive(Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Duration,
    sweep_interval: Duration,
    last_sweep: Instant,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Default interval between opportunistic expiry sweeps.
    pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10);

    /// Create a cache with the given time-to-live and the default sweep
    /// interval.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, Self::DEFAULT_SWEEP_INTERVAL)
    }

    /// Create a cache with custom ttl and sweep interval.
    #[must_use]
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            sweep_interval,
            last_sweep: Instant::now(),
        }
    }

    /// The configured time-to-live.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drop every expired entry now, returning how many were removed.
    pub fn sweep(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        let swept = before - self.entries.len();
        if swept > 0 {
            debug!(swept, "Expired cache entries removed");
        }
        self.last_sweep = Instant::now();
        swept
    }

    fn maybe_sweep(&mut self) {
        if self.last_sweep.elapsed() >= self.sweep_interval {
            self.sweep();
        }
    }

    fn live<'a>(entry: &'a Entry<V>, ttl: Duration) -> Option<&'a V> {
        (entry.inserted_at.elapsed() < ttl).then_some(&entry.value)
    }
}

impl<K: Eq + Hash, V> Cache<K, V> for TtlCache<K, V> {
    fn get(&mut self, key: &K) -> Option<&V> {
        let ttl = self.ttl;
        self.entries
            .get(key)
            .and_then(|entry| Self::live(entry, ttl))
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.maybe_sweep();
        let ttl = self.ttl;
        self.entries
            .insert(
                key,
                Entry {
                    value,
                    inserted_at: Instant::now(),
                },
            )
            .and_then(|old| (old.inserted_at.elapsed() < ttl).then_some(old.value))
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let ttl = self.ttl;
        self.entries
            .remove(key)
            .and_then(|entry| (entry.inserted_at.elapsed() < ttl).then_some(entry.value))
    }

    fn contains(&mut self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize {
        let ttl = self.ttl;
        self.entries
            .values()
            .filter(|entry| entry.inserted_at.elapsed() < ttl)
            .count()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
