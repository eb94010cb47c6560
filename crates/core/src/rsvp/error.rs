use thiserror::Error;

use super::types::MAX_GUEST_NAME_LEN;

/// Errors raised when an RSVP request fails validation.
///
/// These are detected before any call reaches the record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RsvpError {
    #[error("Guest name is required")]
    MissingGuestName,
    #[error("Guest name cannot be empty")]
    EmptyGuestName,
    #[error("Guest name too long (max {MAX_GUEST_NAME_LEN} characters)")]
    GuestNameTooLong,
    #[error("Total attending is required")]
    MissingTotalAttending,
    #[error("Total attending cannot be negative: {0}")]
    NegativeTotalAttending(i32),
    #[error("RSVP ID is required")]
    MissingId,
    #[error("RSVP ID in path ({path}) does not match ID in body ({body})")]
    IdMismatch { path: i64, body: i64 },
}
