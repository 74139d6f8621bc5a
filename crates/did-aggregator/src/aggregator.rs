//! Quality-weighted XOR aggregation of per-finger keys into a single
//! master key, with tiered fallback admission, and the rotation/
//! revocation identities that let a caller update one finger's
//! contribution without re-presenting the others.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use did_fuzzy_extractor::FingerKey;
use did_quantizer::FingerId;

use crate::error::AggregatorError;
use crate::result::AggregationResult;
use crate::thresholds::FallbackThresholds;

/// Aggregates presented finger keys into a master key.
///
/// If every enrolled finger is presented (`presented.len() ==
/// enrolled_count`), the result is a plain XOR with `fallback_mode =
/// false`. Otherwise, admission is gated by `thresholds` on the mean
/// presented quality: missing exactly one finger requires
/// `thresholds.tier_one`; missing two or more requires
/// `thresholds.tier_two` (and at least two fingers presented either way).
///
/// XOR is commutative and associative, so the result does not depend on
/// the order of `presented`.
///
/// # Errors
/// - [`AggregatorError::InsufficientFingers`] if fewer than two keys are
///   presented.
/// - [`AggregatorError::QualityTooLow`] if enough keys are presented for a
///   fallback tier but the mean quality misses that tier's threshold.
pub fn aggregate(
    presented: Vec<(FingerId, FingerKey, u8)>,
    enrolled_count: usize,
    thresholds: &FallbackThresholds,
) -> Result<AggregationResult, AggregatorError> {
    if presented.len() < 2 {
        return Err(AggregatorError::InsufficientFingers);
    }

    let fallback_mode = presented.len() < enrolled_count;
    let average_quality = mean_quality(&presented);

    if fallback_mode {
        let missing = enrolled_count - presented.len();
        let required = if missing == 1 { thresholds.tier_one } else { thresholds.tier_two };
        if average_quality < required {
            warn!(
                presented = presented.len(),
                enrolled_count,
                average_quality,
                required,
                "fallback presentation below the required quality tier"
            );
            return Err(AggregatorError::QualityTooLow);
        }
    }

    let fingers_used: BTreeSet<FingerId> = presented.iter().map(|(id, _, _)| *id).collect();
    let master_key = presented
        .iter()
        .fold(FingerKey::new([0u8; 32]), |acc, (_, key, _)| acc.xor(key));

    debug!(
        presented = presented.len(),
        enrolled_count,
        fallback_mode,
        average_quality,
        "aggregated master key"
    );

    Ok(AggregationResult {
        master_key,
        fingers_used,
        fingers_enrolled: enrolled_count,
        average_quality,
        fallback_mode,
    })
}

fn mean_quality(presented: &[(FingerId, FingerKey, u8)]) -> u8 {
    let sum: u32 = presented.iter().map(|(_, _, q)| u32::from(*q)).sum();
    u8::try_from(sum / presented.len() as u32).unwrap_or(100)
}

/// Rotation identity: replaces one finger's contribution to the master
/// key without requiring the other fingers to be re-presented.
///
/// `new_master = old_master XOR old_finger_key XOR new_finger_key`. The
/// other keys' contributions cancel out since they are unchanged.
#[must_use]
pub fn rotate(old_master: &FingerKey, old_finger_key: &FingerKey, new_finger_key: &FingerKey) -> FingerKey {
    old_master.xor(old_finger_key).xor(new_finger_key)
}

/// Revocation identity: removes one finger's contribution to the master
/// key.
///
/// # Errors
/// Returns [`AggregatorError::WouldUnderflowMinimumFingers`] if
/// `remaining_fingers` (the enrolled count *after* this revocation) would
/// drop below the two-finger floor.
pub fn revoke(
    old_master: &FingerKey,
    removed_finger_key: &FingerKey,
    remaining_fingers: usize,
) -> Result<FingerKey, AggregatorError> {
    if remaining_fingers < 2 {
        return Err(AggregatorError::WouldUnderflowMinimumFingers);
    }
    Ok(old_master.xor(removed_finger_key))
}
