//! Derives the aggregation commitment a DID is built from.
//!
//! Kept distinct from the master key itself so that the DID identifier
//! depends on stable per-finger-id membership rather than presentation
//! order or the specific key bytes a given presentation produced.

use std::collections::BTreeSet;

use did_fuzzy_extractor::FingerKey;
use did_quantizer::FingerId;

/// BLAKE2b personalization for the aggregation commitment (`"agg.commitment.v1"`
/// in spec prose; padded to BLAKE2b's 16-byte personalization width).
const AGG_COMMITMENT_PERSONALIZATION: &[u8; 16] = b"BioDID_AggCmt_v1";

/// Derives the master commitment a DID is built from: a hash of the
/// master key together with the ordered set of finger ids that
/// contributed to it.
///
/// `fingers_used` is a [`BTreeSet`], so iteration is already in the
/// canonical finger order declared by [`FingerId`] — the commitment does
/// not depend on the order fingers were presented in.
#[must_use]
pub fn master_commitment(master_key: &FingerKey, fingers_used: &BTreeSet<FingerId>) -> [u8; 32] {
    let mut state = blake2b_simd::Params::new()
        .hash_length(32)
        .personal(AGG_COMMITMENT_PERSONALIZATION)
        .to_state();
    state.update(master_key.as_bytes());
    for finger_id in fingers_used {
        state.update(finger_id.tag().as_bytes());
    }
    let hash = state.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(hash.as_bytes());
    bytes
}
