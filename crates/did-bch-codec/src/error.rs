//! Error types for the BCH codec.

use thiserror::Error;

/// Errors produced by [`crate::codec::decode`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BchError {
    /// The received word carries more than `t = 10` bit errors and cannot
    /// be corrected.
    #[error("received word has more than {} bit errors and cannot be decoded", crate::codec::T)]
    DecodeFailure,
}
