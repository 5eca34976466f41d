//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Missing and expired keys are not errors; they surface as `None` from
/// lookups. The only failure a caller can provoke is using the cache
/// before it has been initialized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// An operation was invoked before `init` established a store
    #[error("cache not initialized: call init() first")]
    Uninitialized,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
