//! The v1.1 ledger metadata record.

use std::collections::BTreeMap;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use did_fuzzy_extractor::HelperData;

use crate::error::MetadataError;

/// The literal `version` value every record this crate produces carries.
pub const VERSION: &str = "1.1";

/// The inline-helper-data size bound, in bytes (see [`crate::codec`]).
pub const INLINE_SIZE_LIMIT_BYTES: usize = 16 * 1024;

/// Whether `timestamp` carries no finer than millisecond precision, per
/// spec.md's "UTC ISO-8601 with trailing `Z`, millisecond precision".
fn is_millisecond_precision(timestamp: DateTime<Utc>) -> bool {
    timestamp.nanosecond() % 1_000_000 == 0
}

/// Which ledger operation a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// The initial record establishing a DID.
    Enrollment,
    /// Adds an address to the controller set.
    AddController,
    /// Removes an address from the controller set.
    RemoveController,
    /// Marks the DID revoked.
    Revocation,
}

/// Where a record's helper data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelperStorage {
    /// Helper data is embedded in `biometric.helperData`.
    Inline,
    /// Helper data lives at `biometric.helperUri`; the codec does not
    /// mandate a transport.
    External,
}

/// The biometric sub-tree of a v1.1 record.
///
/// Unknown fields inside this sub-tree are rejected at decode (unlike the
/// top-level record, which tolerates unknown fields for forward
/// compatibility).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BiometricSection {
    /// Base58 encoding of the master-commitment digest.
    pub id_hash: String,
    /// Whether `helper_data` is inline or fetched externally.
    pub helper_storage: HelperStorage,
    /// Fetchable reference, present iff `helper_storage == External`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub helper_uri: Option<String>,
    /// Finger-id-tag-keyed helper bundles, present iff
    /// `helper_storage == Inline`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub helper_data: Option<BTreeMap<String, HelperData>>,
}

/// The v1.1 ledger metadata record.
///
/// Readers MUST accept unknown extra top-level fields and ignore them
/// (forward compatibility) — this struct intentionally does not set
/// `deny_unknown_fields`.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordV1_1 {
    /// Always `"1.1"`.
    pub version: String,
    /// The DID this record describes, in `did:<chain>:<network>:<id>`
    /// form.
    pub did: String,
    /// Ordered, duplicate-free wallet addresses authorized to submit
    /// updates. Non-empty.
    pub controllers: Vec<String>,
    /// UTC timestamp, millisecond precision, trailing `Z`.
    pub enrollment_timestamp: DateTime<Utc>,
    /// The biometric sub-tree.
    pub biometric: BiometricSection,
    /// Which operation this record represents.
    pub operation: Operation,
    /// Whether the DID has been revoked as of this record.
    #[serde(default)]
    pub revoked: bool,
    /// Present iff `revoked`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RecordV1_1 {
    /// Checks the structural invariants §4.6 and §3 place on a record.
    ///
    /// This does not check signatures or controller authorization — that
    /// is the ledger-side verifier's responsibility (`did-ledger`).
    ///
    /// # Errors
    /// See [`MetadataError`]'s variants.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.version != VERSION {
            return Err(MetadataError::BadVersion(self.version.clone()));
        }
        if did_identifier::Did::parse(&self.did).is_err() {
            return Err(MetadataError::MissingField(format!("did: not a valid DID: {}", self.did)));
        }
        if !is_millisecond_precision(self.enrollment_timestamp) {
            return Err(MetadataError::BadTimestamp(
                "enrollmentTimestamp must have millisecond precision".to_string(),
            ));
        }
        if let Some(revoked_at) = self.revoked_at {
            if !is_millisecond_precision(revoked_at) {
                return Err(MetadataError::BadTimestamp(
                    "revokedAt must have millisecond precision".to_string(),
                ));
            }
        }
        if self.controllers.is_empty() {
            return Err(MetadataError::EmptyControllers);
        }
        let mut seen = std::collections::HashSet::with_capacity(self.controllers.len());
        for controller in &self.controllers {
            if !seen.insert(controller.as_str()) {
                return Err(MetadataError::DuplicateController(controller.clone()));
            }
        }
        if self.operation == Operation::Enrollment && self.revoked {
            return Err(MetadataError::HelperSchemaMismatch(
                "an enrollment record cannot be revoked".to_string(),
            ));
        }
        if self.revoked && self.revoked_at.is_none() {
            return Err(MetadataError::MissingField("revokedAt".to_string()));
        }
        if !self.revoked && self.revoked_at.is_some() {
            return Err(MetadataError::BadTimestamp(
                "revokedAt present without revoked=true".to_string(),
            ));
        }
        self.biometric.validate()
    }
}

impl BiometricSection {
    /// Checks that `helper_storage` is consistent with which of
    /// `helper_uri`/`helper_data` is populated.
    ///
    /// # Errors
    /// Returns [`MetadataError::HelperSchemaMismatch`] on any mismatch.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let id_hash_bytes = bs58::decode(&self.id_hash)
            .into_vec()
            .map_err(|e| MetadataError::HelperSchemaMismatch(format!("idHash: not valid Base58: {e}")))?;
        if id_hash_bytes.len() != 32 {
            return Err(MetadataError::HelperSchemaMismatch(format!(
                "idHash: Base58-decoded to {} bytes, expected 32",
                id_hash_bytes.len()
            )));
        }

        match self.helper_storage {
            HelperStorage::Inline => {
                if self.helper_data.is_none() {
                    return Err(MetadataError::HelperSchemaMismatch(
                        "helperStorage=inline requires helperData".to_string(),
                    ));
                }
                if self.helper_uri.is_some() {
                    return Err(MetadataError::HelperSchemaMismatch(
                        "helperStorage=inline must not set helperUri".to_string(),
                    ));
                }
            }
            HelperStorage::External => {
                if self.helper_uri.as_deref().unwrap_or("").is_empty() {
                    return Err(MetadataError::HelperSchemaMismatch(
                        "helperStorage=external requires a non-empty helperUri".to_string(),
                    ));
                }
                if self.helper_data.is_some() {
                    return Err(MetadataError::HelperSchemaMismatch(
                        "helperStorage=external must not set helperData".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
