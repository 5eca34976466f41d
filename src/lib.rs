//! Working Memory - an embeddable in-process key-value cache
//!
//! Provides TTL-aware storage with lazy expiry on lookup and a background
//! cleanup task, behind a single lock-guarded handle that many concurrent
//! callers can share. Typical use is memoizing computation results or
//! deduplicating request outcomes across parallel workers in a
//! load-testing run.
//!
//! # Example
//! ```no_run
//! use working_memory::SharedCache;
//!
//! #[tokio::main]
//! async fn main() {
//!     let cache = SharedCache::new();
//!
//!     // 300s default TTL, sweep expired entries every 60s
//!     cache.init(300, 60).await;
//!
//!     cache.set("result:42", "cached", None).await.unwrap();
//!     let value = cache.get("result:42").await.unwrap();
//!     assert_eq!(value.as_deref(), Some("cached"));
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod shared;

mod tasks;

pub use cache::{CacheEntry, CacheStats, TtlStore};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
