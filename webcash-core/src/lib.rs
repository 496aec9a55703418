//! # Webcash Core
//!
//! Value types and codecs for the webcash digital cash protocol.
//!
//! This crate provides the foundation consumed by wallet, miner, and client
//! crates:
//! - Exact fixed-point currency amounts (`Amount`) and their textual/JSON codec
//! - 256-bit hash identifiers (`Hash256`) with hex rendering and decoding
//! - Proof-of-work difficulty measurement and the server acceptance check
//! - The secret/public token pair (`SecretWebcash` / `PublicWebcash`)
//! - Server-declared economic parameters (`ProtocolSettings`)
//! - Deterministic binary serialization
//!
//! Everything here is a pure, synchronous computation over in-memory values.
//! Network access, wallet storage, and mining loops live in other crates.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod crypto;
pub mod error;
pub mod pow;
pub mod serialization;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AmountError, CoreError, HashError, SerializationError, SettingsError};
pub use pow::{apparent_difficulty, check_proof_of_work};
pub use types::{Amount, Hash256, ProtocolSettings, PublicWebcash, SecretWebcash};
