//! Errors produced by [`crate::aggregate`] and the rotation/revocation
//! helpers.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorError {
    /// Fewer than two finger keys were presented. Two is the
    /// information-theoretic floor below which no fallback tier admits a
    /// presentation (see the entropy budget in the module docs).
    #[error("at least two finger keys are required to aggregate")]
    InsufficientFingers,

    /// Enough fingers were presented for a fallback tier, but the mean
    /// quality score fell below that tier's admission threshold.
    #[error("average presented quality is below the required fallback threshold")]
    QualityTooLow,

    /// A revocation would drop the enrolled set below the two-finger
    /// floor.
    #[error("revoking this finger would leave fewer than two enrolled fingers")]
    WouldUnderflowMinimumFingers,
}
