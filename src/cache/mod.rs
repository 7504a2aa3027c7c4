//! Cache Module
//!
//! In-memory response cache with fixed-TTL expiry, lazy removal on read and
//! periodic background reclamation.

mod clock;
mod entry;
mod expiring;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, TokioClock};
pub use entry::CacheEntry;
pub use expiring::{CacheOptions, ExpiringCache};
pub use stats::{CacheStats, StatsRecorder};
pub use store::{CacheStore, Lookup};

// == Public Constants ==
/// Default entry lifetime in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
