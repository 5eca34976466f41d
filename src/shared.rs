//! Shared Cache Facade
//!
//! The process-wide cache handle: one logical instance shared by every
//! concurrent caller, with all operations linearized under a single lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, TtlStore};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_cleanup_task;

// == Cache State ==
/// Lock-guarded state behind a [`SharedCache`].
///
/// `store` is `None` until `init` runs; `generation` increases on every
/// `init`/`shutdown` so a cleanup task bound to a replaced store can tell
/// it has been superseded.
pub(crate) struct CacheState {
    pub(crate) store: Option<TtlStore>,
    pub(crate) generation: u64,
    pub(crate) janitor: Option<JoinHandle<()>>,
}

// == Shared Cache ==
/// Thread-safe cache handle shared by all callers in a process.
///
/// The handle is cheap to clone; every clone refers to the same underlying
/// store, so concurrent workers observe each other's writes. All operations
/// acquire one exclusive lock for their full duration and release it on
/// every exit path, so no caller ever observes a partially-applied
/// mutation.
///
/// A freshly constructed cache is *uninitialized*: every operation except
/// [`SharedCache::init`] returns [`CacheError::Uninitialized`] until `init`
/// establishes a store. Calling `init` again replaces the store wholesale,
/// discarding prior contents and restarting the background cleanup task.
///
/// # Example
/// ```no_run
/// use working_memory::SharedCache;
///
/// #[tokio::main]
/// async fn main() {
///     let cache = SharedCache::new();
///     cache.init(300, 60).await;
///
///     cache.set("user:1", "alice", None).await.unwrap();
///     assert_eq!(
///         cache.get("user:1").await.unwrap(),
///         Some("alice".to_string())
///     );
/// }
/// ```
#[derive(Clone)]
pub struct SharedCache {
    state: Arc<RwLock<CacheState>>,
}

impl SharedCache {
    // == Constructor ==
    /// Creates a new, uninitialized cache handle.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState {
                store: None,
                generation: 0,
                janitor: None,
            })),
        }
    }

    // == Init ==
    /// Initializes (or reinitializes) the cache.
    ///
    /// Replaces any existing store with an empty one, stops the cleanup
    /// task bound to the previous store, and starts a new one when
    /// `cleanup_interval_secs > 0`.
    ///
    /// Zero durations are meaningful: a zero `default_ttl_secs` means
    /// entries without an explicit TTL never expire, and a zero
    /// `cleanup_interval_secs` disables the background cleanup task
    /// (lookups still refuse expired entries).
    ///
    /// Must be called within a tokio runtime when a cleanup task is
    /// requested, since the task is spawned onto the ambient runtime.
    pub async fn init(&self, default_ttl_secs: u64, cleanup_interval_secs: u64) {
        let mut state = self.state.write().await;

        if let Some(janitor) = state.janitor.take() {
            janitor.abort();
            debug!("previous cleanup task stopped");
        }

        state.generation += 1;
        state.store = Some(TtlStore::new(default_ttl_secs));

        if cleanup_interval_secs > 0 {
            state.janitor = Some(spawn_cleanup_task(
                Arc::clone(&self.state),
                cleanup_interval_secs,
                state.generation,
            ));
        }

        info!(
            "cache initialized: default_ttl={}s, cleanup_interval={}s",
            default_ttl_secs, cleanup_interval_secs
        );
    }

    /// Initializes the cache from a [`CacheConfig`].
    pub async fn init_with_config(&self, config: &CacheConfig) {
        self.init(config.default_ttl, config.cleanup_interval).await;
    }

    // == Set ==
    /// Stores a key-value pair with an optional TTL in seconds.
    ///
    /// Omitting the TTL (or passing `Some(0)`) applies the default TTL
    /// established by `init`. Overwriting an existing key resets its
    /// deadline.
    ///
    /// Returns whether the entry is visible to an immediate lookup.
    pub async fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl_secs: Option<u64>,
    ) -> Result<bool> {
        let mut state = self.state.write().await;
        let store = state.store.as_mut().ok_or(CacheError::Uninitialized)?;
        Ok(store.set(key.into(), value.into(), ttl_secs))
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for missing or expired keys. A stored empty string
    /// comes back as `Some("")`, so not-found stays distinguishable from an
    /// empty value.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        // write lock: a lookup may lazily remove an expired entry
        let mut state = self.state.write().await;
        let store = state.store.as_mut().ok_or(CacheError::Uninitialized)?;
        Ok(store.get(key))
    }

    // == Delete ==
    /// Removes a single key, reporting whether it was present.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let mut state = self.state.write().await;
        let store = state.store.as_mut().ok_or(CacheError::Uninitialized)?;
        Ok(store.delete(key))
    }

    // == Flush ==
    /// Atomically removes all entries.
    pub async fn flush(&self) -> Result<()> {
        let mut state = self.state.write().await;
        let store = state.store.as_mut().ok_or(CacheError::Uninitialized)?;
        store.flush();
        Ok(())
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> Result<CacheStats> {
        let state = self.state.read().await;
        let store = state.store.as_ref().ok_or(CacheError::Uninitialized)?;
        Ok(store.stats())
    }

    // == Length ==
    /// Returns the number of physically present entries, including expired
    /// entries the cleanup task has not swept yet.
    pub async fn len(&self) -> Result<usize> {
        let state = self.state.read().await;
        let store = state.store.as_ref().ok_or(CacheError::Uninitialized)?;
        Ok(store.len())
    }

    // == Shutdown ==
    /// Tears the cache down: stops the cleanup task and discards the store.
    ///
    /// The handle returns to the uninitialized state; a later `init` makes
    /// it usable again.
    pub async fn shutdown(&self) {
        let mut state = self.state.write().await;

        if let Some(janitor) = state.janitor.take() {
            janitor.abort();
        }
        state.generation += 1;
        state.store = None;

        info!("cache shut down");
    }
}

impl Default for SharedCache {
    fn default() -> Self {
        Self::new()
    }
}
