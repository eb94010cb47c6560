//! In-memory cache backend implementation.
//!
//! Provides a thread-safe, unbounded in-memory cache for single-instance
//! deployments.

mod cache;

pub use cache::MemoryCache;
