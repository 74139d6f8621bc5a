//! Turns a finger's extracted minutiae into the fixed-length bitvector the
//! rest of the biometric-to-DID pipeline operates on.
//!
//! The quantizer never reads raw sensor images: it consumes already
//! extracted minutiae lists (external collaborator's responsibility) and
//! is a pure, order-independent function of its input.

pub mod error;
pub mod finger;
pub mod minutia;
pub mod params;
pub mod quantizer;
pub mod vector;

pub use error::QuantizeError;
pub use finger::FingerId;
pub use minutia::{FingerTemplate, Minutia};
pub use params::QuantParams;
pub use quantizer::quantize;
pub use vector::QuantizedVector;
