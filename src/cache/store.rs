//! Cache Store Module
//!
//! HashMap storage with per-entry expiry. The store itself is not
//! synchronized; [`ExpiringCache`](super::ExpiringCache) wraps it in a lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats, StatsRecorder};

// == Lookup ==
/// Outcome of a read-only lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Live entry found
    Hit(Bytes),
    /// Entry present but past its deadline; caller should remove it
    Expired,
    /// No entry for the key
    Missing,
}

// == Cache Store ==
/// Key-value storage where every entry lives for the same fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lifetime given to every inserted entry
    ttl: Duration,
    /// Performance statistics
    stats: StatsRecorder,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: StatsRecorder::new(),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its expiry from `now`.
    pub fn insert(&mut self, key: String, value: Bytes, now: Instant) {
        let entry = CacheEntry::new(value, now, self.ttl);
        self.entries.insert(key, entry);
    }

    // == Lookup ==
    /// Looks up `key` without mutating the map.
    ///
    /// Reads never extend an entry's lifetime.
    pub fn lookup(&self, key: &str, now: Instant) -> Lookup {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                self.stats.record_miss();
                Lookup::Expired
            }
            Some(entry) => {
                self.stats.record_hit();
                Lookup::Hit(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                Lookup::Missing
            }
        }
    }

    // == Remove If Expired ==
    /// Removes the entry for `key` only if it is expired as of `now`.
    ///
    /// Returns true if an entry was removed. A fresh entry written after the
    /// caller's lookup is left alone.
    pub fn remove_if_expired(&mut self, key: &str, now: Instant) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now));

        if expired {
            self.entries.remove(key);
            self.stats.record_expired();
        }
        expired
    }

    // == Cleanup Expired ==
    /// Removes all entries expired as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();

        self.stats.record_reclaimed(removed);
        removed
    }

    // == Contains Key ==
    /// Returns true if the map physically holds an entry for `key`,
    /// expired or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the number of stored entries, including not yet reclaimed
    /// expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
