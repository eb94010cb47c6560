//! Cache backend implementations.
//!
//! Concrete implementations of the `Cache` trait defined in
//! `rsvp_core::cache`. Only the in-process memory cache exists today; a
//! shared cache would live next to it.

pub mod memory;

pub use memory::MemoryCache;
