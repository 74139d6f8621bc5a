//! Canonical JSON encoding: deterministic key ordering at every level.
//!
//! `serde_json`'s `Map` is backed by a `BTreeMap` unless the
//! `preserve_order` feature is enabled (it is not, in this workspace), so
//! routing a value through [`serde_json::Value`] before serializing it
//! sorts every object's keys lexicographically — a struct serialized
//! directly would instead emit fields in declaration order. This module
//! makes that round trip explicit rather than relying on it as an
//! incidental property of the dependency configuration.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MetadataError;

/// Serializes `value` to canonical JSON bytes: every object's keys in
/// lexicographic order, recursively.
///
/// # Errors
/// Returns [`MetadataError::MissingField`] wrapping the underlying
/// `serde_json` error if `value` cannot be represented as JSON.
pub fn encode_canonical<T: Serialize>(value: &T) -> Result<Vec<u8>, MetadataError> {
    let as_value = serde_json::to_value(value)
        .map_err(|e| MetadataError::MissingField(format!("failed to canonicalize: {e}")))?;
    serde_json::to_vec(&as_value)
        .map_err(|e| MetadataError::MissingField(format!("failed to serialize canonical form: {e}")))
}

/// Parses canonically-encoded JSON bytes back into `T`.
///
/// # Errors
/// Returns [`MetadataError::MissingField`] wrapping the underlying
/// `serde_json` error if `bytes` does not parse as `T`.
pub fn decode_canonical<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, MetadataError> {
    serde_json::from_slice(bytes).map_err(|e| MetadataError::MissingField(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::encode_canonical;
    use serde_json::json;

    #[test]
    fn object_keys_are_sorted_regardless_of_insertion_order() {
        let value = json!({"zeta": 1, "alpha": 2, "middle": {"z": 1, "a": 2}});
        let bytes = encode_canonical(&value).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let alpha_pos = text.find("alpha").unwrap();
        let zeta_pos = text.find("zeta").unwrap();
        assert!(alpha_pos < zeta_pos);
        let nested_a = text.find("\"a\"").unwrap();
        let nested_z = text.find("\"z\"").unwrap();
        assert!(nested_a < nested_z);
    }
}
