//! TTL Store Module
//!
//! The cache engine: a HashMap of entries with expiry-aware lookups,
//! lazy removal of expired entries, and a sweep used by the background
//! cleanup task.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == TTL Store ==
/// TTL-aware key-value storage.
///
/// Expiry is enforced twice: lookups refuse entries whose deadline has
/// passed (removing them on the spot), and [`TtlStore::cleanup_expired`]
/// sweeps the whole map so memory is reclaimed even for keys nobody asks
/// for again. The store itself is not thread-safe; `SharedCache` wraps it
/// in a lock.
#[derive(Debug)]
pub struct TtlStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Default TTL in seconds for entries without explicit TTL (0 = never expire)
    default_ttl: u64,
    /// Performance counters
    stats: CacheStats,
}

impl TtlStore {
    // == Constructor ==
    /// Creates a new empty TtlStore.
    ///
    /// # Arguments
    /// * `default_ttl_secs` - Default TTL in seconds applied when `set` is
    ///   called without an explicit TTL; `0` means such entries never expire
    pub fn new(default_ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl: default_ttl_secs,
            stats: CacheStats::default(),
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten and the deadline
    /// is reset. TTL resolution: an explicit positive TTL wins; an explicit
    /// zero or omitted TTL falls back to the default TTL; a zero default
    /// means the entry never expires.
    ///
    /// Returns whether the key is visible to an immediate lookup after the
    /// write.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_secs` - Optional TTL in seconds
    pub fn set(&mut self, key: String, value: String, ttl_secs: Option<u64>) -> bool {
        let entry = CacheEntry::new(value, self.resolve_ttl(ttl_secs));
        self.entries.insert(key.clone(), entry);
        self.stats.total_entries = self.entries.len();

        // read back, so the caller learns the same thing a lookup would
        self.entries
            .get(&key)
            .map(|e| !e.is_expired())
            .unwrap_or(false)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for missing keys and for entries whose deadline has
    /// passed, whether or not the cleanup task has swept them yet. Expired
    /// entries found here are removed immediately.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<String> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.misses += 1;
            return None;
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.stats.expired_removed += 1;
            self.stats.misses += 1;
            self.stats.total_entries = self.entries.len();
            return None;
        }

        self.stats.hits += 1;
        Some(entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry by key, reporting whether it was present.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.total_entries = self.entries.len();
        removed
    }

    // == Flush ==
    /// Removes all entries from the store.
    ///
    /// Hit/miss counters survive a flush; only the contents are discarded.
    pub fn flush(&mut self) {
        self.entries.clear();
        self.stats.total_entries = 0;
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());

        let removed = before - self.entries.len();
        self.stats.expired_removed += removed as u64;
        self.stats.total_entries = self.entries.len();
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats
        }
    }

    // == Length ==
    /// Returns the current number of physically present entries, including
    /// expired entries that have not been swept yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == TTL Resolution ==
    /// Maps a caller-supplied TTL in seconds to the effective per-entry
    /// duration. `None` means the entry never expires.
    fn resolve_ttl(&self, ttl_secs: Option<u64>) -> Option<Duration> {
        let secs = match ttl_secs {
            Some(0) | None => self.default_ttl,
            Some(n) => n,
        };
        (secs > 0).then(|| Duration::from_secs(secs))
    }
}
