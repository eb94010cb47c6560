//! Cached repository decorator.
//!
//! `CachedRsvpRepository` wraps any `RsvpRepository` with the cache-aside
//! pattern:
//!
//! - **Reads of one record**: check cache first, on miss fetch from the
//!   repository and populate the cache
//! - **Writes**: persist to the repository, then evict the record's entry
//! - **Listing**: always goes to the repository
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("rsvp.db").await?);
//! let cache = Arc::new(MemoryCache::new());
//!
//! let cached_repo = CachedRsvpRepository::new(repo, cache, KeyLocks::default());
//! ```

mod locks;
mod rsvp;

pub use locks::{KeyLocks, DEFAULT_STRIPES};
pub use rsvp::CachedRsvpRepository;
