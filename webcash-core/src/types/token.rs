//! The secret/public token pair.
//!
//! A webcash token exists in two non-interconvertible forms. The secret form
//! carries the bearer credential: anyone holding the secret string owns the
//! value it represents. The public form carries only the SHA-256 fingerprint
//! of the secret and is safe to transmit or log. Derivation is one-way; no
//! reverse mapping exists.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::{Amount, Hash256};

/// A secret webcash token: the bearer credential plus its claimed amount.
///
/// The secret is security-sensitive. It is zeroized when the token is
/// dropped, is not cloneable, and is redacted from `Debug` output. The only
/// renderings that contain it are the canonical wallet-transfer forms:
/// [`Display`](fmt::Display) and the serde field encoding.
#[derive(PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretWebcash {
    /// The actual secret, typically a 64-character hex string but in
    /// principle any Unicode string value.
    secret: String,
    /// The amount of webcash held by the secret.
    #[zeroize(skip)]
    amount: Amount,
}

impl SecretWebcash {
    /// Create a secret token from its credential string and amount.
    ///
    /// Takes the secret by value so that this token becomes the sole owner
    /// of the credential's storage.
    pub fn new(secret: String, amount: Amount) -> Self {
        SecretWebcash { secret, amount }
    }

    /// Borrow the secret string.
    #[inline]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The amount of webcash held by the secret.
    #[inline]
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for SecretWebcash {
    /// The canonical wallet-transfer form: `e<amount>:secret:<secret>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}:secret:{}", self.amount, self.secret)
    }
}

impl fmt::Debug for SecretWebcash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretWebcash")
            .field("secret", &"<redacted>")
            .field("amount", &self.amount)
            .finish()
    }
}

/// A public webcash token: the hash fingerprint of a secret plus its amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicWebcash {
    /// SHA-256 hash of the secret string's UTF-8 bytes.
    pub hash: Hash256,
    /// The amount of webcash claimed for the hash.
    pub amount: Amount,
}

impl PublicWebcash {
    /// Derive the public token for a secret token.
    ///
    /// The hash is SHA-256 over the raw UTF-8 bytes of the secret string;
    /// the amount is copied unchanged. Pure and deterministic.
    pub fn from_secret(secret: &SecretWebcash) -> Self {
        PublicWebcash {
            hash: Hash256::of(secret.secret.as_bytes()),
            amount: secret.amount,
        }
    }
}

impl fmt::Display for PublicWebcash {
    /// The canonical public form: `e<amount>:public:0x<hex64>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}:public:{}", self.amount, self.hash)
    }
}
