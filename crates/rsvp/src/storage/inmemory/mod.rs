//! In-memory storage backend for testing.
//!
//! Stores RSVPs in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use rsvp::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let created = repo.create_rsvp(&NewRsvp::new("John Doe", 2)).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
