//! Encodes and decodes [`RecordEnvelope`]s, enforcing the structural
//! invariants and size bound from spec §4.6.

use tracing::debug;

use crate::canonical;
use crate::envelope::RecordEnvelope;
use crate::error::MetadataError;
use crate::record::{HelperStorage, RecordV1_1, INLINE_SIZE_LIMIT_BYTES, VERSION};

/// Canonically encodes a record, validating its structural invariants
/// and the inline-helper size bound first.
///
/// # Errors
/// - Any [`MetadataError`] from [`RecordV1_1::validate`].
/// - [`MetadataError::RecordTooLarge`] if `helperStorage == "inline"` and
///   the encoded size exceeds [`INLINE_SIZE_LIMIT_BYTES`].
pub fn encode(envelope: &RecordEnvelope) -> Result<Vec<u8>, MetadataError> {
    let record = envelope.as_v1_1()?;
    record.validate()?;

    let bytes = canonical::encode_canonical(record)?;
    if record.biometric.helper_storage == HelperStorage::Inline && bytes.len() > INLINE_SIZE_LIMIT_BYTES
    {
        return Err(MetadataError::RecordTooLarge { size: bytes.len(), limit: INLINE_SIZE_LIMIT_BYTES });
    }

    debug!(did = %record.did, bytes = bytes.len(), "encoded metadata record");
    Ok(bytes)
}

/// Decodes a record, rejecting an unrecognized `version` tag and
/// validating the v1.1 structural invariants.
///
/// # Errors
/// - [`MetadataError::MissingField`] if `bytes` is not valid JSON, or the
///   `version` field is absent.
/// - [`MetadataError::BadVersion`] if `version` is present but not
///   `"1.1"`.
/// - Any other [`MetadataError`] from [`RecordV1_1::validate`].
pub fn decode(bytes: &[u8]) -> Result<RecordEnvelope, MetadataError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| MetadataError::MissingField(format!("not valid JSON: {e}")))?;

    let version = value
        .get("version")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| MetadataError::MissingField("version".to_string()))?;

    if version != VERSION {
        return Err(MetadataError::BadVersion(version.to_string()));
    }

    let record: RecordV1_1 =
        serde_json::from_value(value).map_err(|e| MetadataError::MissingField(e.to_string()))?;
    record.validate()?;

    Ok(RecordEnvelope::V1_1(record))
}
