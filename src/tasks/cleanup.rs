//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::shared::CacheState;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task sleeps for the configured interval, then takes the same write
/// lock as the foreground operations and removes every entry whose
/// deadline has passed. It is purely a memory-reclamation aid; lookups
/// refuse expired entries on their own.
///
/// The task carries the store generation it was spawned for and exits as
/// soon as it observes a different one, so a sweep never runs against a
/// store that replaced the one it belongs to. `init`/`shutdown` also abort
/// the handle directly.
///
/// # Arguments
/// * `state` - Shared cache state to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps (must be > 0)
/// * `generation` - Store generation this task belongs to
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it when the store is
/// replaced or torn down.
pub(crate) fn spawn_cleanup_task(
    state: Arc<RwLock<CacheState>>,
    cleanup_interval_secs: u64,
    generation: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "cleanup task started with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = state.write().await;

                if guard.generation != generation {
                    debug!("cleanup task superseded by a newer store, exiting");
                    return;
                }

                match guard.store.as_mut() {
                    Some(store) => store.cleanup_expired(),
                    None => {
                        debug!("store torn down, cleanup task exiting");
                        return;
                    }
                }
            };

            if removed > 0 {
                info!("cleanup pass removed {} expired entries", removed);
            } else {
                debug!("cleanup pass found no expired entries");
            }
        }
    })
}
