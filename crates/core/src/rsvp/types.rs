use serde::{Deserialize, Serialize};

/// Maximum length of a guest name, in characters.
pub const MAX_GUEST_NAME_LEN: usize = 50;

/// A stored RSVP.
///
/// The `id` is assigned by the record store on creation and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: i64,
    pub guest_name: String,
    pub total_attending: i32,
}

impl Rsvp {
    /// Creates an RSVP with a known ID.
    pub fn new(id: i64, guest_name: impl Into<String>, total_attending: i32) -> Self {
        Self {
            id,
            guest_name: guest_name.into(),
            total_attending,
        }
    }
}

/// An RSVP that has not been stored yet, so it has no ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRsvp {
    pub guest_name: String,
    pub total_attending: i32,
}

impl NewRsvp {
    pub fn new(guest_name: impl Into<String>, total_attending: i32) -> Self {
        Self {
            guest_name: guest_name.into(),
            total_attending,
        }
    }

    /// Attaches the store-assigned ID.
    pub fn with_id(self, id: i64) -> Rsvp {
        Rsvp {
            id,
            guest_name: self.guest_name,
            total_attending: self.total_attending,
        }
    }
}
