//! Systematic encode/decode for the primitive narrow-sense binary
//! BCH(127,64,10) code: Berlekamp–Massey error-locator recovery followed by
//! Chien search.

use crate::bits::Bits127;
use crate::error::BchError;
use crate::gf;
use crate::poly::{generator_bits, Poly};

/// Codeword length.
pub const N: usize = 127;
/// Message length.
pub const K: usize = 64;
/// Guaranteed-correctable error count.
pub const T: usize = 10;
/// Number of syndromes computed (`2t`).
pub const TWO_T: u8 = 20;

const GENERATOR_DEGREE: usize = N - K;

/// The outcome of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeResult {
    /// The corrected 127-bit codeword.
    pub corrected_bits: Bits127,
    /// Number of bit errors found and corrected.
    pub error_count: u32,
}

/// Encodes a 64-bit message into a systematic 127-bit codeword: the top 64
/// bits are the message unchanged, the low 63 bits are the parity
/// (`message * x^63 mod g(x)`).
#[must_use]
pub fn encode(message: u64) -> Bits127 {
    let shifted = u128::from(message) << GENERATOR_DEGREE;
    let remainder = poly_mod_binary(shifted, u128::from(generator_bits()), GENERATOR_DEGREE);
    Bits127::from_u128(shifted | remainder)
}

/// Recovers the 64-bit message from a codeword produced by [`encode`] (the
/// top 64 bits, unchanged by systematic encoding).
#[must_use]
pub fn message_bits(codeword: Bits127) -> u64 {
    (codeword.to_u128() >> GENERATOR_DEGREE) as u64
}

/// Decodes a received (possibly noisy) 127-bit word, correcting up to
/// [`T`] bit errors.
///
/// # Errors
/// Returns [`BchError::DecodeFailure`] when the number of bit errors
/// exceeds `T`, including cases where Berlekamp–Massey finds an
/// error-locator polynomial of degree `> T` or Chien search does not find
/// exactly `deg(sigma)` roots.
pub fn decode(received: Bits127) -> Result<DecodeResult, BchError> {
    let received_bits = received.to_u128();
    let syndromes = compute_syndromes(received_bits);
    if syndromes.iter().all(|&s| s == 0) {
        return Ok(DecodeResult { corrected_bits: received, error_count: 0 });
    }

    let locator = berlekamp_massey(&syndromes);
    let degree = locator.degree().unwrap_or(0);
    if degree == 0 || degree > T {
        return Err(BchError::DecodeFailure);
    }

    let error_positions = chien_search(&locator);
    if error_positions.len() != degree {
        return Err(BchError::DecodeFailure);
    }

    let mut corrected_bits = received_bits;
    for &position in &error_positions {
        corrected_bits ^= 1 << position;
    }

    if compute_syndromes(corrected_bits).iter().any(|&s| s != 0) {
        return Err(BchError::DecodeFailure);
    }

    Ok(DecodeResult {
        corrected_bits: Bits127::from_u128(corrected_bits),
        error_count: u32::try_from(error_positions.len()).unwrap_or(u32::MAX),
    })
}

fn highest_bit(value: u128) -> Option<usize> {
    if value == 0 {
        None
    } else {
        Some(value.ilog2() as usize)
    }
}

fn poly_mod_binary(mut value: u128, modulus: u128, modulus_degree: usize) -> u128 {
    while let Some(top) = highest_bit(value) {
        if top < modulus_degree {
            break;
        }
        value ^= modulus << (top - modulus_degree);
    }
    value
}

fn eval_binary_poly_at(bits: u128, x: u8) -> u8 {
    (0..N).rev().fold(0u8, |acc, i| {
        let coeff = u8::try_from((bits >> i) & 1).unwrap_or(0);
        gf::mul(acc, x) ^ coeff
    })
}

fn compute_syndromes(received_bits: u128) -> [u8; TWO_T as usize] {
    let mut syndromes = [0u8; TWO_T as usize];
    for (j, slot) in syndromes.iter_mut().enumerate() {
        let exponent = u32::try_from(j + 1).unwrap_or(0);
        *slot = eval_binary_poly_at(received_bits, gf::alpha_pow(exponent));
    }
    syndromes
}

/// Berlekamp–Massey: finds the shortest-LFSR error-locator polynomial
/// `sigma(x)` (with `sigma(0) = 1`) consistent with the given syndromes.
fn berlekamp_massey(syndromes: &[u8]) -> Poly {
    let mut locator = Poly::one();
    let mut previous = Poly::one();
    let mut locator_len = 0usize;
    let mut steps_since_update = 1usize;
    let mut last_discrepancy = 1u8;

    for i in 0..syndromes.len() {
        let mut discrepancy = syndromes[i];
        for j in 1..=locator_len {
            discrepancy ^= gf::mul(locator.coeff(j), syndromes[i - j]);
        }

        if discrepancy == 0 {
            steps_since_update += 1;
            continue;
        }

        let scale = gf::div(discrepancy, last_discrepancy).unwrap_or(0);
        let correction = previous.shift_up(steps_since_update).scale(scale);

        if 2 * locator_len <= i {
            let updated_previous = locator.clone();
            locator = locator.add(&correction);
            locator_len = i + 1 - locator_len;
            previous = updated_previous;
            last_discrepancy = discrepancy;
            steps_since_update = 1;
        } else {
            locator = locator.add(&correction);
            steps_since_update += 1;
        }
    }

    locator
}

/// Chien search: finds every root `alpha^{-i}` of `sigma(x)`, returning the
/// corresponding error positions `i` in `0..127`.
fn chien_search(locator: &Poly) -> Vec<usize> {
    (0..N)
        .filter(|&i| {
            let exponent = u32::try_from((N - i) % N).unwrap_or(0);
            locator.eval(gf::alpha_pow(exponent)) == 0
        })
        .collect()
}
