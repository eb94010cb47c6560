//! In-memory cache implementation.
//!
//! Values never expire and there is no capacity bound: an entry lives until
//! it is deleted or the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rsvp_core::cache::{Cache, Result};

/// In-memory cache implementation.
///
/// Thread-safe cache using `Arc<RwLock<HashMap>>` for concurrent access.
/// Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let store = self.store.read().await;
        Ok(store.len())
    }
}
