//! Cache Entry Module
//!
//! Defines a single cached payload and the instant it stops being valid.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// A cached response body with its expiry deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, never mutated after insertion
    pub value: Bytes,
    /// First instant at which the entry is no longer served
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry inserted at `now` that lives for `ttl`.
    pub fn new(value: Bytes, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so a
    /// lookup landing exactly on the deadline is already a miss.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
