//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.
//! Lazy deletion on read never touches keys that are written once and never
//! read again; the sweep is the memory-reclamation backstop for those.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::memo::FetchCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweep runs. It is tied to the caller through the returned
/// JoinHandle rather than fire-and-forget, so it can be stopped cleanly in
/// tests and on shutdown.
///
/// # Arguments
/// * `cache` - Shared cache handle to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweep runs
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop the sweep.
///
/// # Example
/// ```ignore
/// let cache: FetchCache<String> = FetchCache::new(60_000);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 300);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: FetchCache<V>, cleanup_interval_secs: u64) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Sweep expired entries
            let removed = cache.cleanup().await;

            // Log sweep statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
