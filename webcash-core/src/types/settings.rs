//! Server-declared protocol settings.
//!
//! The settings document is fetched from the server by the client layer; this
//! module is only the pure structural decode of its JSON payload.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::types::Amount;

/// Economic and mining parameters declared by the server for one epoch.
///
/// Immutable once decoded. The core imposes no cross-field policy (for
/// example it does not require the total reward to cover the subsidy); such
/// checks belong to the issuance logic consuming this value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProtocolSettings {
    /// The number of leading bits which must be zero for a work candidate to
    /// be accepted by the server.
    #[serde(rename = "difficulty_target_bits")]
    pub difficulty: u8,
    /// The ratio of initial issuance distributed to expected amount.
    pub ratio: f32,
    /// The amount the miner is allowed to claim.
    #[serde(rename = "mining_amount")]
    pub total_reward: Amount,
    /// The amount which is surrendered to the server operator.
    #[serde(rename = "mining_subsidy_amount")]
    pub server_subsidy: Amount,
    /// The number of subsidy adjustment periods which have elapsed.
    pub epoch: u16,
}

impl ProtocolSettings {
    /// Decode a settings document from its JSON text.
    ///
    /// All fields are required; a missing or mistyped field (including an
    /// amount that fails the amount grammar, or an integer outside its
    /// declared range) is reported as [`SettingsError::Malformed`].
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Encode the settings back to JSON text. Amounts render as quoted
    /// strings of their canonical textual form.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(|e| SettingsError::Malformed {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS_JSON: &str = r#"{
        "difficulty_target_bits": 20,
        "ratio": 0.1,
        "mining_amount": "25",
        "mining_subsidy_amount": "5",
        "epoch": 3
    }"#;

    #[test]
    fn test_decode() {
        let settings = ProtocolSettings::from_json(SETTINGS_JSON).unwrap();
        assert_eq!(settings.difficulty, 20);
        assert!((settings.ratio - 0.1).abs() < f32::EPSILON);
        assert_eq!(settings.total_reward.units(), 2_500_000_000);
        assert_eq!(settings.server_subsidy.units(), 500_000_000);
        assert_eq!(settings.epoch, 3);
    }

    #[test]
    fn test_decode_bare_number_amounts() {
        // Tolerant amount fallback applies inside the settings document too
        let json = r#"{
            "difficulty_target_bits": 18,
            "ratio": 1.0,
            "mining_amount": 25,
            "mining_subsidy_amount": 2.5,
            "epoch": 0
        }"#;
        let settings = ProtocolSettings::from_json(json).unwrap();
        assert_eq!(settings.total_reward.units(), 2_500_000_000);
        assert_eq!(settings.server_subsidy.units(), 250_000_000);
    }

    #[test]
    fn test_reencode_amounts_as_strings() {
        let settings = ProtocolSettings::from_json(SETTINGS_JSON).unwrap();
        let json = settings.to_json().unwrap();
        assert!(json.contains(r#""mining_amount":"25""#));
        assert!(json.contains(r#""mining_subsidy_amount":"5""#));

        let recovered = ProtocolSettings::from_json(&json).unwrap();
        assert_eq!(recovered, settings);
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{
            "difficulty_target_bits": 20,
            "ratio": 0.1,
            "mining_amount": "25",
            "mining_subsidy_amount": "5"
        }"#;
        let err = ProtocolSettings::from_json(json).unwrap_err();
        assert!(err.to_string().contains("epoch"));
    }

    #[test]
    fn test_mistyped_field_rejected() {
        let json = r#"{
            "difficulty_target_bits": 20,
            "ratio": 0.1,
            "mining_amount": "1.2.3",
            "mining_subsidy_amount": "5",
            "epoch": 3
        }"#;
        assert!(ProtocolSettings::from_json(json).is_err());
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        // difficulty_target_bits is 0-255, epoch 0-65535
        let difficulty = r#"{
            "difficulty_target_bits": 256,
            "ratio": 0.1,
            "mining_amount": "25",
            "mining_subsidy_amount": "5",
            "epoch": 3
        }"#;
        assert!(ProtocolSettings::from_json(difficulty).is_err());

        let epoch = r#"{
            "difficulty_target_bits": 20,
            "ratio": 0.1,
            "mining_amount": "25",
            "mining_subsidy_amount": "5",
            "epoch": 65536
        }"#;
        assert!(ProtocolSettings::from_json(epoch).is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "difficulty_target_bits": 20,
            "ratio": 0.1,
            "mining_amount": "25",
            "mining_subsidy_amount": "5",
            "epoch": 3,
            "server_version": "1.2"
        }"#;
        assert!(ProtocolSettings::from_json(json).is_ok());
    }
}
