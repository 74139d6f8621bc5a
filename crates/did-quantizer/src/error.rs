//! Errors produced by the quantizer.

use thiserror::Error;

/// Errors produced by [`crate::quantize`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeError {
    /// The template was empty, or its quantized vector has fewer than
    /// `min_set_bits` set bits. A sensor/quality failure, not a bug: the
    /// caller should prompt for a re-scan.
    #[error("template yields fewer than the minimum required set bits")]
    InsufficientFeatures,
}
