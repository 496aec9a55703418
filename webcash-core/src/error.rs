//! Error types for the webcash core crate.
//!
//! Malformed input is always reported as a value, never a panic. Each error
//! carries the offending input fragment where one exists; a token secret is
//! never copied into an error.

use thiserror::Error;

/// Top-level error type for webcash-core operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Amount text or JSON token failed to parse.
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),
    /// Hash text failed to decode.
    #[error("hash error: {0}")]
    Hash(#[from] HashError),
    /// Settings document failed to decode.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    /// Binary serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Errors from parsing amount text or JSON tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The input matched neither the integer nor the decimal amount grammar,
    /// had more than 8 fractional digits, or overflowed the intermediate
    /// integer range.
    #[error("invalid amount: {input}")]
    Invalid {
        /// The rejected input text.
        input: String,
    },
}

/// Errors from decoding hash text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HashError {
    /// The input did not contain exactly 64 hex digits.
    #[error("invalid hash length: {len} hex digits, expected 64")]
    InvalidLength {
        /// Number of hex digits found after any `0x` prefix.
        len: usize,
    },
    /// The input contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hash: non-hex character")]
    InvalidHex,
}

/// Errors from decoding a protocol settings document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A required field was absent or failed its type's decode rule.
    #[error("malformed settings: {reason}")]
    Malformed {
        /// Decoder description of the offending field.
        reason: String,
    },
}

/// Errors from the deterministic binary codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializationError {
    /// Failed to encode a value to bytes.
    #[error("encode failed: {0}")]
    EncodeFailed(String),
    /// Failed to decode a value from bytes.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
}
