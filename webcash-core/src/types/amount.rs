//! Fixed-point currency amounts.
//!
//! An amount is a count of 1e-8 webcash units held in a u64. All parsing and
//! formatting is exact integer arithmetic; no floating point ever touches the
//! amount path. The canonical textual form is the decimal integer part,
//! optionally followed by `.` and 1-8 fractional digits with no trailing
//! zero (`"1.5"`, `"2"`, `"0.00000001"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AmountError;

/// Number of base units in one webcash.
pub const UNITS_PER_WEBCASH: u64 = 100_000_000;

/// Maximum number of fractional digits in the textual form.
const MAX_FRACTIONAL_DIGITS: usize = 8;

/// An exact webcash amount in units of 1e-8.
///
/// In JSON an amount is always a quoted string of the canonical textual form
/// (`"1.5"`, never a bare number); decoding additionally tolerates a bare
/// numeric token as a compatibility fallback. Binary formats see the raw u64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a raw count of 1e-8 units.
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Amount(units)
    }

    /// The raw count of 1e-8 units.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction. Returns `None` if `other` exceeds `self`.
    #[inline]
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse the amount grammar: `-?[0-9]+` or `[0-9]+\.[0-9]{1,8}`.
    ///
    /// Fractional parts shorter than 8 digits are right-padded with zeros;
    /// longer ones are rejected, never truncated. Intermediate multiplication
    /// happens in the 63-bit signed range, and any overflow (or a negative
    /// result, which cannot be an unsigned amount) is reported as invalid.
    fn from_str(s: &str) -> Result<Self, AmountError> {
        let invalid = || AmountError::Invalid { input: s.to_owned() };

        let units = match s.split_once('.') {
            Some((integer, fractional)) => {
                // Decimal grammar: digits on both sides, at most 8 after the
                // point. A second '.' lands in `fractional` and fails the
                // digit check.
                if integer.is_empty()
                    || fractional.is_empty()
                    || fractional.len() > MAX_FRACTIONAL_DIGITS
                    || !integer.bytes().all(|b| b.is_ascii_digit())
                    || !fractional.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(invalid());
                }
                let integer: i64 = integer.parse().map_err(|_| invalid())?;
                let padding = 10i64.pow((MAX_FRACTIONAL_DIGITS - fractional.len()) as u32);
                let fractional: i64 = fractional.parse::<i64>().map_err(|_| invalid())? * padding;
                integer
                    .checked_mul(UNITS_PER_WEBCASH as i64)
                    .and_then(|units| units.checked_add(fractional))
                    .ok_or_else(invalid)?
            }
            None => {
                // Integer grammar: optional leading '-', then digits. The
                // manual check also rejects the leading '+' and whitespace
                // that i64's own parser would admit.
                let digits = s.strip_prefix('-').unwrap_or(s);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let integer: i64 = s.parse().map_err(|_| invalid())?;
                integer
                    .checked_mul(UNITS_PER_WEBCASH as i64)
                    .ok_or_else(invalid)?
            }
        };

        u64::try_from(units).map(Amount).map_err(|_| invalid())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / UNITS_PER_WEBCASH;
        let fractional = self.0 % UNITS_PER_WEBCASH;
        if fractional == 0 {
            write!(f, "{integer}")
        } else {
            let digits = format!("{fractional:08}");
            write!(f, "{integer}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            // JSON form: always a quoted string, never a bare number.
            serializer.collect_str(self)
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> serde::de::Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an amount string or bare numeric token")
            }

            // Strict branch: a quoted string containing the amount grammar.
            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Amount, E> {
                v.parse().map_err(E::custom)
            }

            // Tolerant fallback: a bare numeric token. The token is rendered
            // back to its decimal text and put through the same grammar, so
            // `1.5` and `"1.5"` decode identically.
            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Amount, E> {
                v.to_string().parse().map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Amount, E> {
                v.to_string().parse().map_err(E::custom)
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Amount, E> {
                v.to_string().parse().map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(AmountVisitor)
        } else {
            u64::deserialize(deserializer).map(Amount)
        }
    }
}
