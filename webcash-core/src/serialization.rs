//! Deterministic binary serialization for protocol values.
//!
//! All core value types share one bincode configuration so that identical
//! values always produce identical bytes across platforms:
//! - Fixed-size integer encoding (not variable-length)
//! - Little-endian byte order
//! - Trailing bytes rejected on deserialization
//!
//! Under this codec an `Amount` is its raw u64 and a `Hash256` is its 32 raw
//! bytes; the textual forms are reserved for the human-readable (JSON) side.

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::SerializationError;

fn config() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Serialize a value to its deterministic byte encoding.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    config()
        .serialize(value)
        .map_err(|e| SerializationError::EncodeFailed(e.to_string()))
}

/// Deserialize a value from its deterministic byte encoding.
///
/// Returns an error if the bytes are malformed, do not match the expected
/// type, or leave trailing garbage.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    config()
        .deserialize(bytes)
        .map_err(|e| SerializationError::DecodeFailed(e.to_string()))
}
