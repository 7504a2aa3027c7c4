//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Reclaim: sweeps expired cache entries once per sweep interval

mod reclaim;

pub use reclaim::{spawn_reclaim_task, ReclaimHandle};
