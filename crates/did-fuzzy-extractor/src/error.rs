//! Errors produced by [`crate::rep`].
//!
//! [`did_quantizer::QuantizeError::InsufficientFeatures`] is a sibling
//! failure mode produced upstream by the quantizer; it is not a variant of
//! this enum because this crate never calls the quantizer itself (the
//! coordinator wires the two together — see `did-coordinator`).

use thiserror::Error;

/// Errors produced by [`crate::rep`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyExtractorError {
    /// The noisy codeword carried more bit errors than the BCH code can
    /// correct. The caller should prompt for a re-scan, or fall back to
    /// fewer fingers via the aggregator's fallback tiers.
    #[error("reproduction input exceeds the BCH code's error-correction capacity")]
    TooNoisy,

    /// The recomputed MAC did not match `helper.mac`: either the helper
    /// was tampered with, or it does not belong to the presented
    /// quantized vector. Not recoverable — this is a hard authentication
    /// failure, not a quality issue.
    #[error("helper data failed MAC verification")]
    Tampered,

    /// `helper.version` or `helper.code_params_tag` does not match the
    /// single supported combination (`0x01`/`0x01`). Not recoverable
    /// without re-enrollment under the currently supported parameters.
    #[error("helper data uses an unsupported version or code parameter tag")]
    UnsupportedParams,
}
