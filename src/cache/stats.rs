//! Cache Statistics Module
//!
//! Lookup and reclamation counters, snapshotted for callers.

use serde::Serialize;

// == Cache Stats ==
/// Cache performance counters.
///
/// The store bumps these fields directly; callers receive a snapshot via
/// `TtlStore::stats`, so reading them never races a mutation.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing (missing or expired key)
    pub misses: u64,
    /// Entries physically removed because their deadline passed
    pub expired_removed: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}
