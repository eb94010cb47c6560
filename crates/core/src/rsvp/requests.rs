//! API request types for RSVP operations.
//!
//! These types are shared between the server and client. Following the
//! Functional Core pattern, validation is done with pure functions.

use serde::{Deserialize, Serialize};

use super::error::RsvpError;
use super::types::{NewRsvp, Rsvp, MAX_GUEST_NAME_LEN};

/// Request payload for creating or replacing an RSVP.
///
/// Every field is optional at the wire level so that missing fields are
/// reported as [`RsvpError`]s instead of opaque deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_attending: Option<i32>,
}

impl RsvpRequest {
    /// Create a request with both record fields set.
    pub fn new(guest_name: impl Into<String>, total_attending: i32) -> Self {
        Self {
            id: None,
            guest_name: Some(guest_name.into()),
            total_attending: Some(total_attending),
        }
    }

    /// Set the RSVP ID carried in the body.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Validates the request for creation.
    ///
    /// A body `id` is ignored: the store always assigns a fresh one.
    pub fn into_new_rsvp(self) -> Result<NewRsvp, RsvpError> {
        let guest_name = self.guest_name.ok_or(RsvpError::MissingGuestName)?;
        validate_guest_name(&guest_name)?;

        let total_attending = self
            .total_attending
            .ok_or(RsvpError::MissingTotalAttending)?;
        validate_total_attending(total_attending)?;

        Ok(NewRsvp {
            guest_name,
            total_attending,
        })
    }

    /// Validates the request as a full replacement of an existing RSVP.
    ///
    /// The ID comes from the path when present, otherwise from the body.
    /// When both are given they must agree.
    pub fn into_rsvp(self, path_id: Option<i64>) -> Result<Rsvp, RsvpError> {
        let id = match (path_id, self.id) {
            (Some(path), Some(body)) if path != body => {
                return Err(RsvpError::IdMismatch { path, body })
            }
            (Some(id), _) | (None, Some(id)) => id,
            (None, None) => return Err(RsvpError::MissingId),
        };

        self.into_new_rsvp().map(|rsvp| rsvp.with_id(id))
    }
}

/// Validates a guest name: non-blank and at most [`MAX_GUEST_NAME_LEN`] characters.
pub fn validate_guest_name(guest_name: &str) -> Result<(), RsvpError> {
    if guest_name.trim().is_empty() {
        return Err(RsvpError::EmptyGuestName);
    }
    if guest_name.chars().count() > MAX_GUEST_NAME_LEN {
        return Err(RsvpError::GuestNameTooLong);
    }
    Ok(())
}

/// Validates the attendee count.
pub fn validate_total_attending(total_attending: i32) -> Result<(), RsvpError> {
    if total_attending < 0 {
        return Err(RsvpError::NegativeTotalAttending(total_attending));
    }
    Ok(())
}
