//! The outcome of [`crate::aggregate`].

use std::collections::BTreeSet;

use did_fuzzy_extractor::FingerKey;
use did_quantizer::FingerId;

/// The aggregated master key plus the bookkeeping the coordinator and the
/// caller need to interpret it.
///
/// `master_key` is secret (it zeroizes on drop, inherited from
/// [`FingerKey`]); every other field is safe to log.
#[derive(Debug)]
pub struct AggregationResult {
    /// XOR of every presented finger key.
    pub master_key: FingerKey,
    /// Which fingers contributed to `master_key`. Always a subset of the
    /// enrolled set; always at least two fingers.
    pub fingers_used: BTreeSet<FingerId>,
    /// How many fingers the caller originally enrolled (the denominator
    /// fallback admission is measured against).
    pub fingers_enrolled: usize,
    /// Mean quality score of the presented fingers, `0..=100`.
    pub average_quality: u8,
    /// `true` iff `fingers_used.len() < fingers_enrolled`, i.e. this
    /// result came from a fallback presentation rather than the full
    /// enrolled set.
    pub fallback_mode: bool,
}
