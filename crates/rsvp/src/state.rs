//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see trait objects; the concrete backend
//! is chosen by feature flag in the factory modules below.

use std::sync::Arc;

use rsvp_core::cache::Cache;
use rsvp_core::storage::RsvpRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// RSVP repository (cached, wraps underlying storage).
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    /// The cache behind `rsvp_repo`, exposed for health reporting.
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Creates a new AppState from an already-wrapped repository and its cache.
    pub fn build(rsvp_repo: Arc<dyn RsvpRepository>, cache: Arc<dyn Cache>) -> Self {
        Self { rsvp_repo, cache }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::{CachedRsvpRepository, KeyLocks};
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new());

            let cached_repo = Arc::new(CachedRsvpRepository::new(
                sqlite_repo,
                memory_cache.clone(),
                KeyLocks::new(config.cache_lock_stripes),
            ));

            Ok(Self::build(cached_repo, memory_cache))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::{CachedRsvpRepository, KeyLocks};
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new());

            let cached_repo = Arc::new(CachedRsvpRepository::new(
                inmemory_repo,
                memory_cache.clone(),
                KeyLocks::new(config.cache_lock_stripes),
            ));

            Ok(Self::build(cached_repo, memory_cache))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
