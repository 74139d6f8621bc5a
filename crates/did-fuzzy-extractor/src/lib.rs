//! Per-finger fuzzy extractor: `Gen` turns a quantized vector into a
//! secret key plus public helper data; `Rep` reproduces that key from a
//! later, noisy reading of the same finger.
//!
//! Built on [`did_bch_codec`]'s BCH(127,64,10) secure sketch and a keyed
//! BLAKE2b-256 hash. No secret ever leaves this crate except as a
//! [`FingerKey`], which zeroizes itself on drop.

pub mod error;
pub mod extractor;
pub mod helper;
pub mod key;

pub use error::FuzzyExtractorError;
pub use extractor::{gen, rep};
pub use helper::{HelperData, CODE_PARAMS_TAG, VERSION};
pub use key::FingerKey;
