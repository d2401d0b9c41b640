//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that runs `cleanup()` on the store every
/// `period`.
///
/// The task holds only a weak reference: it exits on its own once the store
/// is dropped or destroyed. Ticks never overlap; a tick delayed by a busy
/// runtime pushes the next one back instead of bursting.
///
/// Must be called from within a tokio runtime. `period` must be non-zero.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::<String>::new(ttl, 100)));
/// let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_secs(60));
/// // Later, during teardown:
/// handle.abort();
/// ```
pub fn spawn_sweep_task<T>(store: Weak<Mutex<CacheStore<T>>>, period: Duration) -> JoinHandle<()>
where
    T: Clone + Send + 'static,
{
    tokio::spawn(async move {
        debug!(period_ms = period.as_millis() as u64, "cache sweep started");

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(shared) = store.upgrade() else {
                debug!("cache dropped, sweep exiting");
                break;
            };

            let removed = {
                let mut guard = shared.lock();
                if guard.is_destroyed() {
                    None
                } else {
                    Some(guard.cleanup())
                }
            };

            match removed {
                None => {
                    debug!("cache destroyed, sweep exiting");
                    break;
                }
                Some(0) => debug!("cache sweep: no stale entries"),
                Some(count) => info!(removed = count, "cache sweep removed stale entries"),
            }
        }
    })
}
