//! The external helper-blob storage contract the coordinator consumes
//! when an assembled record's inline helper data would exceed the
//! on-ledger size bound.
//!
//! Storage of helper data on remote blobstores is out of scope for the
//! core (spec §1): this trait only narrows the contract a caller's blob
//! store must satisfy, the same way `did_ledger::LedgerIndex` narrows
//! the ledger boundary.

use std::collections::BTreeMap;

use async_trait::async_trait;

use did_fuzzy_extractor::HelperData;

/// Persists an oversized helper bundle out-of-band and returns a
/// fetchable URI for it.
///
/// The core does not mandate a transport (spec §6): implementations are
/// free to write to any blobstore, content-addressed store, or
/// off-chain file, as long as `put`'s returned URI is later fetchable by
/// whatever reads `MetadataRecord.biometric.helperUri`.
#[async_trait]
pub trait HelperStore: Send + Sync {
    /// Persists `helpers` for `did` and returns the URI a later `verify`
    /// call can fetch it from.
    ///
    /// # Errors
    /// Implementation-defined; surfaced to the enrollment caller as
    /// [`crate::CoordinatorError::HelperStore`].
    async fn put(&self, did: &str, helpers: &BTreeMap<String, HelperData>) -> Result<String, String>;
}
