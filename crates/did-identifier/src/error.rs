//! Errors produced while parsing a [`crate::Did`].

use thiserror::Error;

/// Errors produced by [`crate::Did::parse`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DidError {
    /// The input contains a `#` fragment, which marks it as a prior
    /// `did:<chain>:<wallet>#<fragment>` form. That form is no longer
    /// supported and is rejected outright rather than partially parsed.
    #[error("legacy did:<chain>:<wallet>#<fragment> form is not supported")]
    LegacyFormat,

    /// The input is not four colon-separated segments
    /// (`did`, chain, network, body), or the literal segments do not
    /// match what this crate produces.
    #[error("malformed DID: {0}")]
    BadFormat(String),

    /// The network segment is neither `mainnet` nor `testnet`.
    #[error("unknown network {0:?}")]
    BadNetwork(String),

    /// The body segment is not valid Base58, or does not decode to
    /// exactly 32 bytes.
    #[error("DID body must decode to exactly 32 bytes")]
    BadBodyLength,
}
