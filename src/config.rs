//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// A zero duration carries meaning here: a zero default TTL means entries never
/// expire unless a `set` passes an explicit TTL, and a zero cleanup interval
/// disables the background cleanup task entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default TTL in seconds for entries without explicit TTL (0 = never expire)
    pub default_ttl: u64,
    /// Background cleanup task interval in seconds (0 = cleanup disabled)
    pub cleanup_interval: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env() {
        // Defaults apply when the variables are absent
        env::remove_var("DEFAULT_TTL");
        env::remove_var("CLEANUP_INTERVAL");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.cleanup_interval, 60);

        // Explicit values override the defaults
        env::set_var("DEFAULT_TTL", "10");
        env::set_var("CLEANUP_INTERVAL", "2");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl, 10);
        assert_eq!(config.cleanup_interval, 2);

        env::remove_var("DEFAULT_TTL");
        env::remove_var("CLEANUP_INTERVAL");
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = CacheConfig {
            default_ttl: 42,
            cleanup_interval: 7,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: CacheConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_ttl, 42);
        assert_eq!(parsed.cleanup_interval, 7);
    }
}
