//! Structural validation errors for the v1.1 metadata record.
//!
//! The codec validates structure only — field presence, value shapes,
//! non-empty controllers, timestamp format, and size limits. Signature
//! verification and controller authorization are the ledger-side
//! verifier's job (see `did-ledger`), which consumes the controller set
//! at an update's parent block height.

use thiserror::Error;

/// Errors produced while encoding or decoding a [`crate::RecordEnvelope`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The record's `version` field is not `"1.1"`, or is missing a
    /// version entirely.
    #[error("unsupported or missing record version: {0:?}")]
    BadVersion(String),

    /// A required field is missing or has the wrong JSON shape.
    #[error("missing or malformed field: {0}")]
    MissingField(String),

    /// The same controller address appears more than once in
    /// `controllers`.
    #[error("duplicate controller address: {0}")]
    DuplicateController(String),

    /// `controllers` is empty.
    #[error("controllers must be non-empty")]
    EmptyControllers,

    /// A timestamp field is not a valid UTC ISO-8601 string with
    /// millisecond precision and a trailing `Z`.
    #[error("malformed timestamp: {0}")]
    BadTimestamp(String),

    /// The encoded record exceeds the 16 KiB inline-helper size bound.
    #[error("encoded record is {size} bytes, exceeding the {limit}-byte inline limit")]
    RecordTooLarge {
        /// The record's actual encoded size, in bytes.
        size: usize,
        /// The inline-storage size limit, in bytes.
        limit: usize,
    },

    /// `biometric.helperStorage` is inconsistent with the presence of
    /// `helperData`/`helperUri`, or a `helperData` entry fails to parse.
    #[error("helper data schema mismatch: {0}")]
    HelperSchemaMismatch(String),
}
