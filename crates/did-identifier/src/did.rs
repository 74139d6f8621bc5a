//! The `did:<chain>:<network>:<base58-id>` identifier.

use std::fmt;

use tracing::debug;

use crate::error::DidError;
use crate::network::Network;

/// Fixed chain literal every DID this crate produces carries.
pub const CHAIN: &str = "biodid";

/// BLAKE2b personalization for the DID hash (`"did.v1"` in spec prose;
/// padded to BLAKE2b's 16-byte personalization width).
const DID_PERSONALIZATION: &[u8; 16] = b"BioDID_Did_v1___";

/// A decentralized identifier bound to an aggregated biometric
/// commitment rather than to a registry authority.
///
/// Two enrollments of the same biometric on the same network always
/// produce the same `Did` ([`did_from_commitment`] is a pure function of
/// its inputs); across networks, the `id` bytes are identical and only
/// [`Did::network`] differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Did {
    network: Network,
    id: [u8; 32],
}

impl Did {
    /// The network segment.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// The raw 32-byte identifier (before Base58 encoding).
    #[must_use]
    pub const fn id_bytes(&self) -> [u8; 32] {
        self.id
    }

    /// Parses a `did:<chain>:<network>:<body>` string.
    ///
    /// # Errors
    /// - [`DidError::LegacyFormat`] if the input contains `#`.
    /// - [`DidError::BadFormat`] if it is not exactly four colon-separated
    ///   segments, or the `did`/chain literals do not match.
    /// - [`DidError::BadNetwork`] if the network segment is unrecognized.
    /// - [`DidError::BadBodyLength`] if the body is not valid Base58
    ///   decoding to exactly 32 bytes.
    pub fn parse(s: &str) -> Result<Self, DidError> {
        if s.contains('#') {
            return Err(DidError::LegacyFormat);
        }

        let parts: Vec<&str> = s.split(':').collect();
        let [scheme, chain, network, body] = parts[..] else {
            return Err(DidError::BadFormat(s.to_string()));
        };
        if scheme != "did" {
            return Err(DidError::BadFormat(format!("expected scheme 'did', got {scheme:?}")));
        }
        if chain != CHAIN {
            return Err(DidError::BadFormat(format!("expected chain {CHAIN:?}, got {chain:?}")));
        }

        let network = Network::parse(network)?;
        let decoded = bs58::decode(body).into_vec().map_err(|_| DidError::BadBodyLength)?;
        let id: [u8; 32] = decoded.try_into().map_err(|_| DidError::BadBodyLength)?;

        Ok(Self { network, id })
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "did:{CHAIN}:{}:{}", self.network, bs58::encode(self.id).into_string())
    }
}

/// Derives a [`Did`] from an aggregated commitment.
///
/// `id = BLAKE2b-256(personalisation="did.v1", input=commitment)`,
/// Base58-encoded with no prefix, checksum, or padding. Deterministic:
/// the same `(commitment, network)` pair always yields the same `Did`.
#[must_use]
pub fn did_from_commitment(commitment: &[u8; 32], network: Network) -> Did {
    let hash = blake2b_simd::Params::new()
        .hash_length(32)
        .personal(DID_PERSONALIZATION)
        .to_state()
        .update(commitment)
        .finalize();
    let mut id = [0u8; 32];
    id.copy_from_slice(hash.as_bytes());

    debug!(network = %network, "derived DID from aggregated commitment");
    Did { network, id }
}

#[cfg(test)]
mod tests {
    use super::{did_from_commitment, Did};
    use crate::error::DidError;
    use crate::network::Network;

    #[test]
    fn same_commitment_and_network_always_yields_the_same_did() {
        let commitment = [42u8; 32];
        let a = did_from_commitment(&commitment, Network::Testnet);
        let b = did_from_commitment(&commitment, Network::Testnet);
        assert_eq!(a, b);
    }

    #[test]
    fn networks_differ_only_in_the_network_segment() {
        let commitment = [7u8; 32];
        let mainnet = did_from_commitment(&commitment, Network::Mainnet);
        let testnet = did_from_commitment(&commitment, Network::Testnet);
        assert_eq!(mainnet.id_bytes(), testnet.id_bytes());
        assert_ne!(mainnet.network(), testnet.network());
    }

    #[test]
    fn did_round_trips_through_its_string_form() {
        let commitment = [9u8; 32];
        let did = did_from_commitment(&commitment, Network::Mainnet);
        let text = did.to_string();
        assert!(text.starts_with("did:biodid:mainnet:"));
        assert_eq!(Did::parse(&text).unwrap(), did);
    }

    #[test]
    fn base58_body_is_forty_three_to_forty_four_characters() {
        let commitment = [1u8; 32];
        let did = did_from_commitment(&commitment, Network::Mainnet);
        let body = did.to_string();
        let body = body.rsplit(':').next().unwrap();
        assert!((43..=44).contains(&body.len()), "body length was {}", body.len());
    }

    #[test]
    fn legacy_fragment_form_is_rejected() {
        let err = Did::parse("did:biodid:mainnet:abc#frag").unwrap_err();
        assert_eq!(err, DidError::LegacyFormat);
    }

    #[test]
    fn wrong_body_length_is_rejected() {
        let short_body = bs58::encode([1u8; 16]).into_string();
        let err = Did::parse(&format!("did:biodid:mainnet:{short_body}")).unwrap_err();
        assert_eq!(err, DidError::BadBodyLength);
    }

    #[test]
    fn unknown_chain_is_rejected() {
        let body = bs58::encode([1u8; 32]).into_string();
        let err = Did::parse(&format!("did:otherchain:mainnet:{body}")).unwrap_err();
        assert!(matches!(err, DidError::BadFormat(_)));
    }
}
