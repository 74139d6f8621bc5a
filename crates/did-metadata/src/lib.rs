//! Canonical encoding and structural validation of the v1.1 ledger
//! metadata record, plus builders for its controller-set update
//! operations.
//!
//! The codec validates structure only: field presence, value shapes,
//! non-empty controllers, timestamp presence, and the inline-helper size
//! bound. Signature verification and controller authorization are the
//! ledger-side verifier's responsibility (`did-ledger`), which folds a
//! DID's record history in block-height order.

pub mod canonical;
pub mod codec;
pub mod controllers;
pub mod envelope;
pub mod error;
pub mod record;

pub use codec::{decode, encode};
pub use envelope::RecordEnvelope;
pub use error::MetadataError;
pub use record::{BiometricSection, HelperStorage, Operation, RecordV1_1, INLINE_SIZE_LIMIT_BYTES, VERSION};
