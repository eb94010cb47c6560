use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Everything except `NotFound` is a storage failure: it is reported to the
/// caller as a server-side error and never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Shorthand for a missing RSVP.
    pub fn rsvp_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Rsvp",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
