mod error;
mod mock_data;
mod requests;
mod types;

pub use error::RsvpError;
pub use mock_data::seed_rsvps;
pub use requests::{validate_guest_name, validate_total_attending, RsvpRequest};
pub use types::{NewRsvp, Rsvp, MAX_GUEST_NAME_LEN};
