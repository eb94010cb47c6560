//! Cached RSVP repository decorator.
//!
//! Wraps an `RsvpRepository` implementation with the cache-aside pattern and
//! per-id locking, so a read can never put a value in the cache that a
//! concurrent, already-committed write has replaced.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use rsvp_core::cache::{deserialize_rsvp, rsvp_key, serialize_rsvp, Cache};
use rsvp_core::rsvp::{NewRsvp, Rsvp};
use rsvp_core::storage::{RepositoryError, Result, RsvpRepository};

use super::locks::KeyLocks;

/// Cached RSVP repository decorator.
///
/// - **`get_rsvp`**: under the id's lock, check cache first; on miss fetch
///   from the repository and populate the cache when the record exists.
///   Absent ids are never cached.
/// - **`update_rsvp` / `delete_rsvp`**: under the id's lock, persist to the
///   repository, then evict the id's entry. Nothing is evicted if the write
///   fails. The write and the eviction run on their own task, so dropping
///   the caller (request timeout, client disconnect) cannot separate them.
/// - **`create_rsvp` / `list_rsvps`**: straight to the repository.
///
/// Cache failures are logged and treated as misses. Repository failures are
/// always returned to the caller.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedRsvpRepository<R, C>
where
    R: RsvpRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    locks: Arc<KeyLocks>,
}

impl<R, C> CachedRsvpRepository<R, C>
where
    R: RsvpRepository + 'static,
    C: Cache + 'static,
{
    /// Creates a new cached RSVP repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `locks` - Per-id lock set guarding load/populate and write/evict
    pub fn new(repository: Arc<R>, cache: Arc<C>, locks: KeyLocks) -> Self {
        Self {
            repository,
            cache,
            locks: Arc::new(locks),
        }
    }

    /// Returns the cached record for `id`, loading it from the repository on
    /// a miss.
    pub async fn get_or_load(&self, id: i64) -> Result<Option<Rsvp>> {
        let _guard = self.locks.lock(id).await;
        let cache_key = rsvp_key(id);

        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_rsvp(&bytes) {
                Ok(rsvp) => {
                    tracing::trace!(rsvp_id = id, "Cache hit for rsvp");
                    return Ok(Some(rsvp));
                }
                Err(err) => {
                    tracing::warn!(rsvp_id = id, error = %err, "Cached rsvp is corrupt");
                    self.evict(id).await;
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(rsvp_id = id, error = %err, "Cache read failed");
            }
        }

        tracing::trace!(rsvp_id = id, "Cache miss for rsvp");
        let rsvp = self.repository.get_rsvp(id).await?;

        if let Some(ref r) = rsvp {
            match serialize_rsvp(r) {
                Ok(bytes) => {
                    if let Err(err) = self.cache.set(&cache_key, &bytes).await {
                        tracing::warn!(rsvp_id = id, error = %err, "Failed to cache rsvp");
                    }
                }
                Err(err) => {
                    tracing::warn!(rsvp_id = id, error = %err, "Failed to serialize rsvp");
                }
            }
        }

        Ok(rsvp)
    }

    /// Removes the cached entry for `id`, if any.
    ///
    /// Does not take the id's lock; callers that need ordering against
    /// `get_or_load` must already hold it. A failed delete is logged and
    /// otherwise ignored, see [`Cache::delete`].
    pub async fn evict(&self, id: i64) {
        evict_entry(self.cache.as_ref(), id).await;
    }

    /// Runs `write` and then evicts `id`, both under the id's lock, on a
    /// spawned task.
    ///
    /// The caller only awaits the task. If the caller is dropped the task
    /// still finishes, so a committed write is always followed by its
    /// eviction before the lock is released.
    async fn write_then_evict<F, Fut>(&self, id: i64, write: F) -> Result<()>
    where
        F: FnOnce(Arc<R>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let repository = self.repository.clone();
        let cache = self.cache.clone();
        let locks = self.locks.clone();

        let task = tokio::spawn(async move {
            let _guard = locks.lock(id).await;
            let result = write(repository).await;
            if result.is_ok() {
                evict_entry(cache.as_ref(), id).await;
            }
            result
        });

        task.await.map_err(|err| {
            tracing::error!(rsvp_id = id, error = %err, "Rsvp write task failed");
            RepositoryError::QueryFailed(format!("write task failed: {}", err))
        })?
    }
}

async fn evict_entry<C: Cache>(cache: &C, id: i64) {
    if let Err(err) = cache.delete(&rsvp_key(id)).await {
        tracing::warn!(rsvp_id = id, error = %err, "Failed to evict rsvp");
    } else {
        tracing::debug!(rsvp_id = id, "Evicted rsvp");
    }
}

#[async_trait]
impl<R, C> RsvpRepository for CachedRsvpRepository<R, C>
where
    R: RsvpRepository + 'static,
    C: Cache + 'static,
{
    async fn create_rsvp(&self, rsvp: &NewRsvp) -> Result<Rsvp> {
        let created = self.repository.create_rsvp(rsvp).await?;
        tracing::debug!(rsvp_id = created.id, "Rsvp created");
        Ok(created)
    }

    async fn get_rsvp(&self, id: i64) -> Result<Option<Rsvp>> {
        self.get_or_load(id).await
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
        self.repository.list_rsvps().await
    }

    async fn update_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        let id = rsvp.id;
        let rsvp = rsvp.clone();

        self.write_then_evict(id, move |repository| async move {
            repository.update_rsvp(&rsvp).await
        })
        .await?;

        tracing::debug!(rsvp_id = id, "Rsvp updated");
        Ok(())
    }

    async fn delete_rsvp(&self, id: i64) -> Result<()> {
        self.write_then_evict(id, move |repository| async move {
            repository.delete_rsvp(id).await
        })
        .await?;

        tracing::debug!(rsvp_id = id, "Rsvp deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.repository.ping().await
    }
}
