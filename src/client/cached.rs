//! Cache-aside helpers
//!
//! Look in the cache first, fetch and remember on a miss. Two concurrent
//! misses on one key both fetch; nothing is deduplicated.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::client::Fetcher;
use crate::error::FetchError;

/// Returns the cached body for `url`, fetching and caching it on a miss.
///
/// Failed fetches are not cached.
pub async fn get_or_fetch<F>(cache: &ExpiringCache, url: &str, fetcher: &F) -> Result<Bytes, FetchError>
where
    F: Fetcher + ?Sized,
{
    if let Some(body) = cache.get(url).await {
        return Ok(body);
    }

    let body = fetcher.fetch(url).await?;
    debug!(url, bytes = body.len(), "caching fetched body");
    cache.add(url, body.clone()).await;
    Ok(body)
}

/// [`get_or_fetch`] followed by JSON decoding into `T`.
pub async fn fetch_json<T, F>(cache: &ExpiringCache, url: &str, fetcher: &F) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let body = get_or_fetch(cache, url, fetcher).await?;
    Ok(serde_json::from_slice(&body)?)
}
