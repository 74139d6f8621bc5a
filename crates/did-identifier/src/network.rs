//! The two networks a DID can be anchored to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DidError;

/// Which network a DID's commitment was hashed for.
///
/// Part of the DID string itself (not part of the key-derivation input):
/// the same biometric commitment produces DIDs on both networks that
/// differ only in this segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Test network.
    Testnet,
}

impl Network {
    /// The literal segment used in a DID string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Parses a DID's network segment.
    ///
    /// # Errors
    /// Returns [`DidError::BadNetwork`] if `s` is neither `"mainnet"` nor
    /// `"testnet"`.
    pub fn parse(s: &str) -> Result<Self, DidError> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(DidError::BadNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
