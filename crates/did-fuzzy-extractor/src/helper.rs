//! The public helper bundle emitted by [`crate::gen`] and consumed by
//! [`crate::rep`].

use serde::{Deserialize, Serialize};

use did_quantizer::FingerId;

/// Serializes/deserializes fixed-width byte arrays as Base58 strings.
///
/// `HelperData` sits inside `did-metadata`'s `biometric` sub-tree, and
/// spec.md is normative that bytes there are Base58-encoded, not raw JSON
/// integer arrays — this mirrors how `did-coordinator` already encodes
/// the master commitment as `id_hash`.
mod b58_bytes {
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bs58::encode(bytes).into_string().serialize(serializer)
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let decoded = bs58::decode(&text).into_vec().map_err(D::Error::custom)?;
        <[u8; N]>::try_from(decoded.as_slice()).map_err(|_| {
            D::Error::custom(format!("expected {N} Base58-decoded bytes, got {}", decoded.len()))
        })
    }
}

/// The only supported BCH code parameter set tag. Future parameter sets
/// would be reserved under other tag values; v1.1 recognizes only this one.
pub const CODE_PARAMS_TAG: u8 = 0x01;

/// The only supported helper schema version.
pub const VERSION: u8 = 0x01;

/// Public per-finger helper data: everything [`crate::rep`] needs to
/// reproduce a [`crate::FingerKey`] from a noisy quantized vector.
///
/// Entirely public — may be stored inline in a ledger record or
/// externally and fetched by URI (see `did-metadata`). Immutable once
/// created; revocation removes a finger's id from the enrolled set
/// rather than mutating its helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperData {
    /// Which finger this helper reproduces a key for.
    pub finger_id: FingerId,
    /// Random salt mixed into key and MAC-key derivation.
    #[serde(with = "b58_bytes")]
    pub salt: [u8; 32],
    /// `codeword XOR w`, packed into 16 bytes (the secure-sketch offset).
    #[serde(with = "b58_bytes")]
    pub offset: [u8; 16],
    /// Truncated MAC over every other field, keyed on a hash of the
    /// recovered key.
    #[serde(with = "b58_bytes")]
    pub mac: [u8; 16],
    /// Tag identifying the BCH parameter set this helper was built
    /// against (`0x01` in this schema version).
    pub code_params_tag: u8,
    /// Helper schema version (`0x01` in this schema version).
    pub version: u8,
}

impl HelperData {
    /// Bytes the MAC is computed over: every field except `mac`, in a
    /// fixed order.
    #[must_use]
    pub fn mac_input(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + 32 + 16 + 1 + 1);
        buf.push(finger_tag_byte(self.finger_id));
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.offset);
        buf.push(self.code_params_tag);
        buf.push(self.version);
        buf
    }

    /// Whether this helper's version and code parameter tag are the ones
    /// this crate supports.
    #[must_use]
    pub const fn has_supported_params(&self) -> bool {
        self.version == VERSION && self.code_params_tag == CODE_PARAMS_TAG
    }
}

/// A stable, schema-internal byte for a finger id, distinct from
/// [`FingerId::tag`]'s human-readable string (used in the MAC input so
/// the encoding is fixed-width and independent of string contents).
const fn finger_tag_byte(finger_id: FingerId) -> u8 {
    match finger_id {
        FingerId::LThumb => 0,
        FingerId::LIndex => 1,
        FingerId::LMiddle => 2,
        FingerId::LRing => 3,
        FingerId::LPinky => 4,
        FingerId::RThumb => 5,
        FingerId::RIndex => 6,
        FingerId::RMiddle => 7,
        FingerId::RRing => 8,
        FingerId::RPinky => 9,
    }
}
