//! Errors produced by [`crate::enroll`], [`crate::verify_identity`], and
//! [`crate::verify_presence`].

use thiserror::Error;

use did_aggregator::AggregatorError;
use did_identifier::DidError;
use did_ledger::LedgerError;
use did_metadata::{MetadataError, RecordV1_1};
use did_quantizer::{FingerId, QuantizeError};

use crate::verification::PresentationFailure;

/// Errors produced by the enrollment and verification coordinators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinatorError {
    /// A presented template failed quantization during enrollment.
    ///
    /// Per spec §4.7 step 1, this fails the whole enrollment immediately
    /// — unlike verification, where per-finger failures are collected
    /// and handed to the aggregator's fallback admission instead.
    #[error("finger {finger:?} yielded insufficient features: {source}")]
    InsufficientFeatures {
        /// Which finger's template was insufficient.
        finger: FingerId,
        /// The underlying quantizer error.
        #[source]
        source: QuantizeError,
    },

    /// Aggregation failed: too few fingers reproduced keys, or the mean
    /// quality of those that did missed the required fallback tier.
    ///
    /// Carries the per-finger failures collected along the way (empty
    /// during enrollment, where `Gen` cannot itself fail) so a caller can
    /// build the composite report spec §7 calls for.
    #[error("aggregation failed: {source}")]
    Aggregation {
        /// The aggregator's error.
        #[source]
        source: AggregatorError,
        /// Why each finger that did not contribute a key failed.
        finger_failures: Vec<(FingerId, PresentationFailure)>,
    },

    /// The DID computed for this enrollment already exists on the
    /// ledger.
    ///
    /// Not retried: the caller should offer an add-controller flow
    /// against the existing record instead of re-enrolling (spec §7).
    #[error("a record for this DID already exists")]
    DuplicateEnrollment(Box<RecordV1_1>),

    /// Aggregation succeeded, but the recomputed DID does not match the
    /// DID verification was asked to confirm.
    ///
    /// Expected for fallback presentations: they prove presence, not
    /// identity (see [`crate::verify_presence`]).
    #[error("recomputed DID does not match the expected DID")]
    IdentityMismatch,

    /// An external helper blob store rejected a `put`.
    #[error("helper data store failed: {0}")]
    HelperStore(String),

    /// The ledger adapter returned an error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The metadata codec rejected the assembled record.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// A DID string failed to parse.
    #[error(transparent)]
    Did(#[from] DidError),
}
