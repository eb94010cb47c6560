mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::rsvp_key;
pub use serialization::{deserialize_rsvp, serialize_rsvp, SerializationError};
pub use traits::Cache;
