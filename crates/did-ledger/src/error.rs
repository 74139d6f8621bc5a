//! Errors produced by [`crate::LedgerIndex::append`].

use thiserror::Error;

/// Errors produced by a [`crate::LedgerIndex`] adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Another enrollment for this DID already won the race (or a client
    /// skipped the pre-check `exists` call). Not retryable: the losing
    /// enrollment must not be resubmitted under the same DID.
    #[error("a record for this DID already exists and this submission lost the race")]
    Conflict,

    /// None of the presented signers is a member of the controller set
    /// at the update's parent height.
    #[error("no presented signer is an authorized controller at the parent height")]
    BadSignature,

    /// The record itself fails structural validation, or targets a DID
    /// with no existing enrollment (for a non-enrollment operation).
    #[error("record failed schema validation: {0}")]
    SchemaInvalid(String),
}
