//! Cryptographic primitives for the webcash protocol.
//!
//! This module provides:
//! - SHA-256 hashing (token fingerprint derivation, proof-of-work candidates)
//!
//! The protocol's bearer credential is an opaque secret string, so no key
//! pairs or signatures are involved at this layer.

mod hashing;

pub use hashing::sha256;
