//! The `LedgerIndex` contract the core consumes.
//!
//! Transaction assembly, fee computation, and submission are out of
//! scope (§1): this trait only covers the read/write shape the core's
//! coordinator needs. Implementations are expected to be eventually
//! consistent after finality; that is the implementation's
//! responsibility, not this crate's.

use async_trait::async_trait;

use did_metadata::RecordV1_1;

use crate::error::LedgerError;

/// An address asserted to have signed the submission of a record.
///
/// Signature cryptography, wallet UX, and key-signing ceremonies are out
/// of scope (§1) — by the time a [`Signer`] reaches [`LedgerIndex`], an
/// upstream layer the core does not own has already authenticated it.
/// This type exists so `append`'s authorization check has something to
/// compare against the controller set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer(pub String);

/// The ledger-side interface the core's coordinator depends on.
///
/// Implementations MAY block and MAY be called from any async runtime
/// the caller chooses — the core imposes none (§5). Methods take `&self`
/// rather than `&mut self`: concurrent callers are expected, and any
/// required mutual exclusion is the implementation's concern (see
/// [`crate::InMemoryLedger`]'s `RwLock`-backed store).
#[async_trait]
pub trait LedgerIndex: Send + Sync {
    /// Returns the earliest enrollment record for `did`, if any.
    async fn exists(&self, did: &str) -> Result<Option<RecordV1_1>, LedgerError>;

    /// Appends a record, authorized by `signers`.
    ///
    /// # Errors
    /// - [`LedgerError::Conflict`] if `record.operation` is `enrollment`
    ///   and a record for this DID already exists.
    /// - [`LedgerError::BadSignature`] if `record.operation` is an update
    ///   and no member of `signers` is a controller at the parent
    ///   height.
    /// - [`LedgerError::SchemaInvalid`] if the record fails structural
    ///   validation, or an update targets a DID with no prior enrollment.
    async fn append(&self, record: RecordV1_1, signers: Vec<Signer>) -> Result<(), LedgerError>;

    /// Returns every record for `did`, ordered by block height.
    async fn history(&self, did: &str) -> Result<Vec<RecordV1_1>, LedgerError>;
}
