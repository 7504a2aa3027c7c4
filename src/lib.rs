//! Pokedex - an interactive explorer for the Pokemon catalog API
//!
//! Responses are memoized in expiring caches that drop entries lazily on
//! read and sweep them in the background.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use config::Config;
pub use repl::{Caches, Explorer};
pub use tasks::spawn_reclaim_task;
