//! Functional core for the rsvp service.
//!
//! Pure domain types, request validation, and the trait seams (`RsvpRepository`,
//! `Cache`) that the service crate implements. Nothing in here performs I/O.

pub mod cache;
pub mod rsvp;
pub mod storage;
