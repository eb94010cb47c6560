//! Pure functions for serializing/deserializing RSVPs to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use crate::rsvp::Rsvp;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an RSVP to JSON bytes.
pub fn serialize_rsvp(rsvp: &Rsvp) -> Result<Vec<u8>> {
    serde_json::to_vec(rsvp).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an RSVP.
pub fn deserialize_rsvp(bytes: &[u8]) -> Result<Rsvp> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_rsvp_is_json() {
        let rsvp = Rsvp::new(3, "John Doe", 2);
        let bytes = serialize_rsvp(&rsvp).unwrap();

        assert_eq!(
            String::from_utf8(bytes.clone()).unwrap(),
            r#"{"id":3,"guestName":"John Doe","totalAttending":2}"#
        );
        assert_eq!(deserialize_rsvp(&bytes).unwrap(), rsvp);
    }

    #[test]
    fn test_deserialize_invalid_bytes() {
        let result = deserialize_rsvp(b"not json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        let result = deserialize_rsvp(br#"{"id": 1}"#);

        assert!(result.is_err());
    }
}
