//! SQLite repository implementation.
//!
//! Implements `RsvpRepository` from `rsvp_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use rsvp_core::rsvp::{NewRsvp, Rsvp};
use rsvp_core::storage::{RepositoryError, Result, RsvpRepository};

use super::conversions::row_to_rsvp;
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Rsvp";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on the single background thread owned by the
/// `tokio_rusqlite::Connection`, so writes to one row are serialized.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl RsvpRepository for SqliteRepository {
    async fn create_rsvp(&self, rsvp: &NewRsvp) -> Result<Rsvp> {
        let new_rsvp = rsvp.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_RSVP,
                    rusqlite::params![new_rsvp.guest_name, new_rsvp.total_attending],
                )
                .map_err(wrap_err)?;
                Ok(new_rsvp.with_id(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "unknown"))
    }

    async fn get_rsvp(&self, id: i64) -> Result<Option<Rsvp>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_RSVP_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_rsvp) {
                    Ok(rsvp) => Ok(Some(rsvp)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_RSVPS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_rsvp).map_err(wrap_err)?;

                let mut rsvps = Vec::new();
                for row_result in rows {
                    rsvps.push(row_result.map_err(wrap_err)?);
                }
                Ok(rsvps)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "unknown"))
    }

    async fn update_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        let id = rsvp.id;
        let guest_name = rsvp.guest_name.clone();
        let total_attending = rsvp.total_attending;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_RSVP,
                        rusqlite::params![id, guest_name, total_attending],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn delete_rsvp(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_RSVP, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    tracing::trace!(rsvp_id = id, "Delete matched no rows");
                }
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}
