//! Drives the end-to-end biometric-to-DID flow: quantize each finger,
//! run the per-finger fuzzy extractor, aggregate into a master key,
//! derive a DID, check the ledger for a pre-existing identity, and
//! assemble the v1.1 metadata record for the caller to submit.
//!
//! This crate does not submit records itself (`did-ledger::LedgerIndex`
//! is the caller's boundary) and does not transport helper blobs to an
//! external store itself ([`HelperStore`] is the caller's analogous
//! boundary for that).

pub mod commitment;
pub mod enrollment;
pub mod error;
pub mod helper_store;
pub mod verification;

pub use commitment::master_commitment;
pub use enrollment::enroll;
pub use error::CoordinatorError;
pub use helper_store::HelperStore;
pub use verification::{verify_identity, verify_presence, PresentationFailure};
