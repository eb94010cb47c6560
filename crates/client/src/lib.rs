//! rsvp_client - CLI client for the rsvp API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RsvpClient;
pub use error::{ClientError, Result};
