//! Expired Entry Reclaim Task
//!
//! Background task that periodically removes expired cache entries, so keys
//! that are never read again do not hold memory forever.

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::cache::ExpiringCache;

/// Handle to a running reclaim task.
///
/// Dropping the handle leaves the task running; call [`shutdown`] to stop it
/// and wait for it to exit.
///
/// [`shutdown`]: ReclaimHandle::shutdown
#[derive(Debug)]
pub struct ReclaimHandle {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ReclaimHandle {
    /// Requests cancellation and waits for the task to finish.
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            warn!("Reclaim task ended abnormally: {}", e);
        }
    }

    /// Token that stops this task when cancelled.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a task that sweeps `cache` once per sweep interval until `token`
/// is cancelled.
///
/// The first sweep happens one interval after spawning. Each sweep holds the
/// cache's write lock for the whole scan.
///
/// # Example
/// ```ignore
/// let cache = ExpiringCache::new(Duration::from_secs(300))?;
/// let reclaim = spawn_reclaim_task("locations", cache.clone(), CancellationToken::new());
/// // Later, during shutdown:
/// reclaim.shutdown().await;
/// ```
pub fn spawn_reclaim_task(
    name: &'static str,
    cache: ExpiringCache,
    token: CancellationToken,
) -> ReclaimHandle {
    let period = cache.sweep_interval();
    let cancelled = token.clone();

    let handle = tokio::spawn(
        async move {
            info!("Starting reclaim task with interval of {:?}", period);

            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        debug!("Reclaim task cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        let removed = cache.reclaim_expired().await;
                        if removed > 0 {
                            info!("Reclaim: removed {} expired entries", removed);
                        } else {
                            debug!("Reclaim: no expired entries found");
                        }
                    }
                }
            }
        }
        .instrument(info_span!("reclaim", cache = name)),
    );

    ReclaimHandle { token, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheOptions;
    use std::time::Duration;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn test_reclaim_removes_unread_entries() {
        let cache = ExpiringCache::new(TTL).unwrap();
        cache.add("expire_soon", "value").await;

        let reclaim = spawn_reclaim_task("test", cache.clone(), CancellationToken::new());

        time::sleep(TTL + Duration::from_secs(1)).await;

        assert!(
            !cache.contains_key("expire_soon").await,
            "Expired entry should have been reclaimed"
        );
        assert_eq!(cache.stats().await.reclaimed, 1);
        assert_eq!(cache.stats().await.expired, 0);

        reclaim.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reclaim_preserves_live_entries() {
        let options = CacheOptions::new(TTL).with_sweep_interval(Duration::from_secs(10));
        let cache = ExpiringCache::with_options(options).unwrap();
        cache.add("long_lived", "value").await;

        let reclaim = spawn_reclaim_task("test", cache.clone(), CancellationToken::new());

        time::sleep(Duration::from_secs(35)).await;

        assert!(cache.contains_key("long_lived").await);
        assert_eq!(cache.stats().await.reclaimed, 0);

        reclaim.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reclaim_follows_sweep_interval() {
        let options = CacheOptions::new(TTL).with_sweep_interval(TTL * 2);
        let cache = ExpiringCache::with_options(options).unwrap();
        cache.add("k", "value").await;

        let reclaim = spawn_reclaim_task("test", cache.clone(), CancellationToken::new());

        // Expired but no sweep has run yet
        time::sleep(TTL + Duration::from_secs(1)).await;
        assert!(cache.contains_key("k").await);

        time::sleep(TTL).await;
        assert!(!cache.contains_key("k").await);

        reclaim.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reclaim_stops_on_cancel() {
        let cache = ExpiringCache::new(TTL).unwrap();
        let parent = CancellationToken::new();

        let reclaim = spawn_reclaim_task("test", cache, parent.child_token());
        assert!(!reclaim.is_finished());

        parent.cancel();
        time::sleep(Duration::from_millis(10)).await;

        assert!(reclaim.token().is_cancelled());
        assert!(reclaim.is_finished(), "Task should exit after cancellation");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_joins_task() {
        let cache = ExpiringCache::new(TTL).unwrap();
        let reclaim = spawn_reclaim_task("test", cache, CancellationToken::new());

        tokio::time::timeout(Duration::from_secs(1), reclaim.shutdown())
            .await
            .expect("shutdown should complete promptly");
    }
}
