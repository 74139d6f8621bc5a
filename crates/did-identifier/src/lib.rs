//! Derives and parses the `did:<chain>:<network>:<base58-id>` identifier
//! bound to an aggregated biometric commitment.

pub mod did;
pub mod error;
pub mod network;

pub use did::{did_from_commitment, Did, CHAIN};
pub use error::DidError;
pub use network::Network;
