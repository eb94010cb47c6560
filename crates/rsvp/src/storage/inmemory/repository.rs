//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rsvp_core::rsvp::{NewRsvp, Rsvp, MAX_GUEST_NAME_LEN};
use rsvp_core::storage::{RepositoryError, Result, RsvpRepository};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, Rsvp>,
    next_id: i64,
}

/// In-memory storage backend for testing.
///
/// Ids start at 1 and are never reused, matching the SQLite backend.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

/// Same column constraints the SQLite schema enforces.
fn check_constraints(guest_name: &str, total_attending: i32) -> Result<()> {
    if guest_name.chars().count() > MAX_GUEST_NAME_LEN {
        return Err(RepositoryError::ConstraintViolation(format!(
            "guest_name longer than {MAX_GUEST_NAME_LEN} characters"
        )));
    }
    if total_attending < 0 {
        return Err(RepositoryError::ConstraintViolation(
            "total_attending must be >= 0".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl RsvpRepository for InMemoryRepository {
    async fn create_rsvp(&self, rsvp: &NewRsvp) -> Result<Rsvp> {
        check_constraints(&rsvp.guest_name, rsvp.total_attending)?;

        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let created = rsvp.clone().with_id(id);
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn get_rsvp(&self, id: i64) -> Result<Option<Rsvp>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        check_constraints(&rsvp.guest_name, rsvp.total_attending)?;

        let mut table = self.table.write().await;
        match table.rows.get_mut(&rsvp.id) {
            Some(existing) => {
                *existing = rsvp.clone();
                Ok(())
            }
            None => Err(RepositoryError::rsvp_not_found(rsvp.id)),
        }
    }

    async fn delete_rsvp(&self, id: i64) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}
