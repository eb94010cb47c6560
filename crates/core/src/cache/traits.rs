use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
///
/// Entries have no expiry and the cache has no capacity bound: a value stays
/// until it is deleted or the process restarts.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting a missing key is a no-op.
    ///
    /// Callers log a failed delete and carry on, since the store write it
    /// follows has already committed. An implementation must therefore not
    /// fail a delete while `get` can still return the entry: if the backend
    /// is unreachable, `get` must fail too.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Returns the number of cached values.
    async fn len(&self) -> Result<usize>;

    /// Returns true if nothing is cached.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
