//! `Rep`-based identity and presence verification.
//!
//! Reproduces finger keys from a (possibly noisy) reading plus
//! previously issued helper data, then checks either the recomputed DID
//! ([`verify_identity`]) or only that enough fingers reproduced keys to
//! satisfy aggregation admission ([`verify_presence`]). Per-finger
//! failures never abort verification early — the spec's Design Notes
//! resolve the source's ambiguous fallback-DID behavior by having
//! fallback presentations authenticate presence, not identity, so the
//! two checks are kept as separate functions a caller must choose
//! between explicitly.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use did_aggregator::{aggregate, AggregationResult, FallbackThresholds};
use did_fuzzy_extractor::{rep, FingerKey, FuzzyExtractorError, HelperData};
use did_identifier::{did_from_commitment, Did, Network};
use did_quantizer::{quantize, FingerId, FingerTemplate, QuantParams};

use crate::commitment::master_commitment;
use crate::error::CoordinatorError;

/// Why a single presented finger did not contribute a key during
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationFailure {
    /// No helper data was presented for this finger at all.
    NoHelperPresented,
    /// The quantizer rejected the reading (see
    /// [`did_quantizer::QuantizeError`]).
    InsufficientFeatures,
    /// `Rep` failed; see [`FuzzyExtractorError`] for which reason.
    Reproduction(FuzzyExtractorError),
}

/// Runs `Rep` for every presented template against its matching helper,
/// collecting successes and per-finger failures without aborting early.
fn reproduce_keys(
    templates: &[FingerTemplate],
    helpers: &BTreeMap<String, HelperData>,
    quant_params: &QuantParams,
) -> (Vec<(FingerId, FingerKey, u8)>, Vec<(FingerId, PresentationFailure)>) {
    let mut presented = Vec::new();
    let mut failures = Vec::new();

    for template in templates {
        let finger_id = template.finger_id;
        let Some(helper) = helpers.get(finger_id.tag()) else {
            warn!(finger = finger_id.tag(), "no helper data presented for this finger");
            failures.push((finger_id, PresentationFailure::NoHelperPresented));
            continue;
        };

        let vector = match quantize(template, quant_params) {
            Ok(v) => v,
            Err(_) => {
                failures.push((finger_id, PresentationFailure::InsufficientFeatures));
                continue;
            }
        };

        match rep(vector, helper) {
            Ok(key) => presented.push((finger_id, key, template.quality)),
            Err(e) => {
                debug!(finger = finger_id.tag(), error = ?e, "reproduction failed for this finger");
                failures.push((finger_id, PresentationFailure::Reproduction(e)));
            }
        }
    }

    (presented, failures)
}

/// Verifies that `templates` reproduce the exact enrollment DID.
///
/// Fallback presentations (fewer usable fingers than `enrolled_count`)
/// may still pass the aggregator's quality admission, but recompute a
/// different master commitment — and hence a different DID — than the
/// full enrolled set. This function never treats that as a pass; use
/// [`verify_presence`] for the relaxed liveness check.
///
/// # Errors
/// - [`CoordinatorError::Aggregation`] if too few fingers reproduced
///   keys, or the admitted fallback tier's quality threshold was missed.
/// - [`CoordinatorError::IdentityMismatch`] if aggregation succeeded but
///   the recomputed DID does not equal `expected_did`.
pub fn verify_identity(
    templates: &[FingerTemplate],
    helpers: &BTreeMap<String, HelperData>,
    expected_did: &Did,
    network: Network,
    enrolled_count: usize,
    quant_params: &QuantParams,
    thresholds: &FallbackThresholds,
) -> Result<(), CoordinatorError> {
    let (presented, failures) = reproduce_keys(templates, helpers, quant_params);

    let aggregation = aggregate(presented, enrolled_count, thresholds)
        .map_err(|source| CoordinatorError::Aggregation { source, finger_failures: failures })?;

    let commitment = master_commitment(&aggregation.master_key, &aggregation.fingers_used);
    let recomputed = did_from_commitment(&commitment, network);

    if recomputed != *expected_did {
        warn!("recomputed DID does not match the expected DID");
        return Err(CoordinatorError::IdentityMismatch);
    }

    Ok(())
}

/// Verifies only that enough fingers reproduced keys to satisfy the
/// aggregator's fallback admission — a liveness/presence check that does
/// *not* require matching a previously issued DID.
///
/// # Errors
/// [`CoordinatorError::Aggregation`] if fewer fingers reproduced keys
/// than any fallback tier admits, or the mean quality of those that did
/// missed the admitted tier's threshold.
pub fn verify_presence(
    templates: &[FingerTemplate],
    helpers: &BTreeMap<String, HelperData>,
    enrolled_count: usize,
    quant_params: &QuantParams,
    thresholds: &FallbackThresholds,
) -> Result<AggregationResult, CoordinatorError> {
    let (presented, failures) = reproduce_keys(templates, helpers, quant_params);
    aggregate(presented, enrolled_count, thresholds)
        .map_err(|source| CoordinatorError::Aggregation { source, finger_failures: failures })
}
