//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that periodically sweeps stale entries out of
/// the given cache.
///
/// The sweep period equals the cache's retention interval, so an entry
/// outlives its interval by at most one tick. The task loops until aborted;
/// the returned `JoinHandle` is the cancellation capability — the owning
/// process aborts it during shutdown instead of relying on process exit.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(Duration::from_secs(300))?;
/// let reaper = spawn_reaper(cache.clone());
/// // Later, during shutdown:
/// reaper.abort();
/// ```
pub fn spawn_reaper(cache: Cache) -> JoinHandle<()> {
    let interval = cache.interval();

    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        loop {
            // Waiting state: idle until the next tick
            tokio::time::sleep(interval).await;

            // Sweeping state: one full pass under the guard
            let removed = cache.sweep();

            if removed > 0 {
                info!("Reaper sweep: removed {} stale entries", removed);
            } else {
                debug!("Reaper sweep: no stale entries found");
            }
        }
    })
}
