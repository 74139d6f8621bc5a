//! Primitive narrow-sense binary BCH(127,64,10) codec over GF(2^7).
//!
//! This is the secure-sketch error-correcting layer underneath
//! `did-fuzzy-extractor`: [`codec::encode`] turns a random 64-bit message
//! into a 127-bit codeword; [`codec::decode`] recovers it from a codeword
//! corrupted by up to [`codec::T`] bit errors, using Berlekamp–Massey and
//! Chien search. The GF(2^7) exponent/log tables and the generator
//! polynomial are computed once per process and shared read-only
//! thereafter.

pub mod bits;
pub mod codec;
pub mod error;
pub mod gf;
pub mod poly;

pub use bits::Bits127;
pub use codec::{decode, encode, message_bits, DecodeResult, K, N, T};
pub use error::BchError;
