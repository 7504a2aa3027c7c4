//! Client Module
//!
//! Network access for the explorer: a [`Fetcher`] seam with a reqwest
//! implementation, API endpoint construction and the cache-aside helpers the
//! commands go through.

mod cached;
mod endpoints;
mod fetcher;

pub use cached::{fetch_json, get_or_fetch};
pub use endpoints::Endpoints;
pub use fetcher::{Fetcher, HttpFetcher};
