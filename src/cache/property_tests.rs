//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify store-level correctness properties.

use proptest::prelude::*;

use crate::cache::TtlStore;

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates cache values (empty values are legal and must round-trip)
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

/// A sequence of store operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and retrieving it before expiration returns the exact
    // value that was stored, including the empty string.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = TtlStore::new(TEST_DEFAULT_TTL);

        prop_assert!(store.set(key.clone(), value.clone(), None));

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // For any key, the last value written is the one a lookup observes.
    #[test]
    fn prop_overwrite_last_write_wins(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        let mut store = TtlStore::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), v1, None);
        store.set(key.clone(), v2.clone(), None);

        prop_assert_eq!(store.get(&key), Some(v2));
        prop_assert_eq!(store.len(), 1, "Overwrite must not duplicate the key");
    }

    // After a delete, a lookup reports not-found.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut store = TtlStore::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), value, None);
        prop_assert!(store.get(&key).is_some(), "Key should exist before delete");

        prop_assert!(store.delete(&key));
        prop_assert_eq!(store.get(&key), None, "Key should not exist after delete");
    }

    // After a flush, every previously stored key reports not-found.
    #[test]
    fn prop_flush_clears_everything(
        pairs in prop::collection::hash_map(key_strategy(), value_strategy(), 1..20)
    ) {
        let mut store = TtlStore::new(TEST_DEFAULT_TTL);

        for (key, value) in &pairs {
            store.set(key.clone(), value.clone(), None);
        }

        store.flush();

        prop_assert!(store.is_empty());
        for key in pairs.keys() {
            prop_assert_eq!(store.get(key), None, "Flushed key still present");
        }
    }

    // For any sequence of operations, the hit/miss counters reflect exactly
    // the lookup outcomes that occurred.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = TtlStore::new(TEST_DEFAULT_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value, None);
                }
                CacheOp::Get { key } => {
                    match store.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}
