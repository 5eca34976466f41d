//! Background Tasks Module
//!
//! Contains background tasks tied to the lifetime of the shared cache.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired cache entries at configured intervals

mod cleanup;

pub(crate) use cleanup::spawn_cleanup_task;
