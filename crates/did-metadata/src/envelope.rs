//! A tagged wrapper over the version-specific record types.
//!
//! The source's metadata schema evolves field by field across versions;
//! rather than growing one struct with optional fields for every era,
//! each schema version gets its own type and the codec dispatches on the
//! `version` discriminator. Only v1.1 exists today; a future v1.2 would
//! add a sibling variant, never replace this one, so existing ledger
//! history continues to decode.

use crate::error::MetadataError;
use crate::record::RecordV1_1;

/// A metadata record tagged by schema version.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordEnvelope {
    /// Schema v1.1, the only version this crate currently supports.
    V1_1(RecordV1_1),
}

impl RecordEnvelope {
    /// Borrows the v1.1 record, if that is what this envelope holds.
    ///
    /// # Errors
    /// Returns [`MetadataError::BadVersion`] for any future variant this
    /// crate does not yet know how to handle at the call site.
    pub fn as_v1_1(&self) -> Result<&RecordV1_1, MetadataError> {
        match self {
            RecordEnvelope::V1_1(record) => Ok(record),
        }
    }

    /// Consumes the envelope, returning the v1.1 record.
    ///
    /// # Errors
    /// Returns [`MetadataError::BadVersion`] for any future variant this
    /// crate does not yet know how to handle at the call site.
    pub fn into_v1_1(self) -> Result<RecordV1_1, MetadataError> {
        match self {
            RecordEnvelope::V1_1(record) => Ok(record),
        }
    }
}

impl From<RecordV1_1> for RecordEnvelope {
    fn from(record: RecordV1_1) -> Self {
        RecordEnvelope::V1_1(record)
    }
}
