use async_trait::async_trait;

use crate::rsvp::{NewRsvp, Rsvp};

use super::Result;

/// Repository for RSVP records.
///
/// Implementations are the source of truth: every write is visible to the
/// next read from any caller. Caching is layered on top by wrapping one
/// repository in another.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Stores a new RSVP and returns it with its assigned ID.
    async fn create_rsvp(&self, rsvp: &NewRsvp) -> Result<Rsvp>;

    /// Gets an RSVP by its ID. Unknown IDs yield `Ok(None)`.
    async fn get_rsvp(&self, id: i64) -> Result<Option<Rsvp>>;

    /// Gets every stored RSVP. Ordering is not guaranteed.
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>>;

    /// Overwrites an existing RSVP.
    ///
    /// Fails with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// if no RSVP has this ID.
    async fn update_rsvp(&self, rsvp: &Rsvp) -> Result<()>;

    /// Deletes an RSVP by its ID. Deleting an unknown ID is not an error.
    async fn delete_rsvp(&self, id: i64) -> Result<()>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
