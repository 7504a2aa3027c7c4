//! Expiring Cache Module
//!
//! Thread-safe handle over a [`CacheStore`], shared between command handlers
//! and the background reclaim task.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, Clock, Lookup, TokioClock};
use crate::error::{CacheError, Result};

// == Cache Options ==
/// Construction parameters for an [`ExpiringCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Lifetime of every entry
    pub ttl: Duration,
    /// How often the reclaim task sweeps; defaults to `ttl`
    pub sweep_interval: Option<Duration>,
}

impl CacheOptions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sweep_interval: None,
        }
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Returns the effective sweep interval.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval.unwrap_or(self.ttl)
    }

    /// Rejects zero durations.
    pub fn validate(&self) -> Result<()> {
        if self.ttl.is_zero() {
            return Err(CacheError::InvalidTtl(self.ttl));
        }
        if let Some(interval) = self.sweep_interval {
            if interval.is_zero() {
                return Err(CacheError::InvalidSweepInterval(interval));
            }
        }
        Ok(())
    }
}

// == Expiring Cache ==
/// Cloneable handle to a TTL cache guarded by a single lock.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    clock: Arc<dyn Clock>,
    sweep_interval: Duration,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache with the given TTL, sweeping once per TTL.
    ///
    /// Fails with [`CacheError::InvalidTtl`] when `ttl` is zero.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_options(CacheOptions::new(ttl))
    }

    /// Creates an empty cache from explicit options using the tokio clock.
    pub fn with_options(options: CacheOptions) -> Result<Self> {
        Self::with_clock(options, Arc::new(TokioClock))
    }

    /// Creates an empty cache that reads time from `clock`.
    pub fn with_clock(options: CacheOptions, clock: Arc<dyn Clock>) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            store: Arc::new(RwLock::new(CacheStore::new(options.ttl))),
            clock,
            sweep_interval: options.sweep_interval(),
        })
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`; it expires one TTL from now.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        let now = self.clock.now();

        let mut store = self.store.write().await;
        debug!(key = %key, bytes = value.len(), "cache add");
        store.insert(key, value, now);
    }

    // == Get ==
    /// Returns the live value for `key`, or `None` on a miss.
    ///
    /// An expired entry is removed before returning `None`. The lookup runs
    /// under the read lock; only the removal takes the write lock, and it
    /// re-checks expiry so a concurrent `add` is never discarded.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let lookup = {
            let store = self.store.read().await;
            store.lookup(key, self.clock.now())
        };

        match lookup {
            Lookup::Hit(value) => {
                debug!(key, "cache hit");
                Some(value)
            }
            Lookup::Missing => {
                debug!(key, "cache miss");
                None
            }
            Lookup::Expired => {
                let mut store = self.store.write().await;
                if store.remove_if_expired(key, self.clock.now()) {
                    debug!(key, "cache entry expired, removed");
                }
                None
            }
        }
    }

    // == Reclaim Expired ==
    /// Removes every expired entry under one write-lock acquisition.
    ///
    /// Returns the number of entries removed.
    pub async fn reclaim_expired(&self) -> usize {
        let mut store = self.store.write().await;
        store.cleanup_expired(self.clock.now())
    }

    // == Accessors ==
    /// Returns true if storage physically holds `key`, expired or not.
    pub async fn contains_key(&self, key: &str) -> bool {
        self.store.read().await.contains_key(key)
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }
}
