//! Polynomial arithmetic over GF(2^7).
//!
//! Coefficients are ordered low-degree first (`self.0[i]` is the
//! coefficient of `x^i`). Used to build the BCH generator polynomial once
//! at process start, and by Berlekamp–Massey / Chien search during
//! decoding.

use crate::gf;
use std::sync::OnceLock;

/// A polynomial over GF(2^7).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly(pub Vec<u8>);

impl Poly {
    /// The zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Vec::new())
    }

    /// The constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self(vec![1])
    }

    /// Highest degree with a nonzero coefficient, or `None` for the zero
    /// polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.0.iter().rposition(|&c| c != 0)
    }

    /// Drops trailing zero coefficients.
    pub fn trim(&mut self) {
        while matches!(self.0.last(), Some(0)) {
            self.0.pop();
        }
    }

    /// Coefficient of `x^i`, or `0` past the polynomial's degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> u8 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Evaluates the polynomial at a field element via Horner's method.
    #[must_use]
    pub fn eval(&self, x: u8) -> u8 {
        self.0.iter().rev().fold(0u8, |acc, &c| gf::mul(acc, x) ^ c)
    }

    /// Polynomial addition (same as subtraction in characteristic 2).
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.0.len().max(other.0.len());
        let mut out = vec![0u8; len];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.coeff(i) ^ other.coeff(i);
        }
        let mut p = Self(out);
        p.trim();
        p
    }

    /// Polynomial multiplication.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.0.is_empty() || other.0.is_empty() {
            return Self::zero();
        }
        let mut out = vec![0u8; self.0.len() + other.0.len() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.0.iter().enumerate() {
                out[i + j] ^= gf::mul(a, b);
            }
        }
        let mut p = Self(out);
        p.trim();
        p
    }

    /// Scales every coefficient by `factor`.
    #[must_use]
    pub fn scale(&self, factor: u8) -> Self {
        Self(self.0.iter().map(|&c| gf::mul(c, factor)).collect())
    }

    /// Multiplies by `x^shift`.
    #[must_use]
    pub fn shift_up(&self, shift: usize) -> Self {
        if self.0.is_empty() {
            return Self::zero();
        }
        let mut out = vec![0u8; self.0.len() + shift];
        out[shift..].copy_from_slice(&self.0);
        Self(out)
    }
}

/// The minimal polynomial of `alpha^i` over GF(2) (degree `<= 7`), found as
/// the product of `(x + alpha^c)` over the Frobenius conjugates of `i`.
#[must_use]
pub fn minimal_polynomial(i: u32) -> Poly {
    let mut conjugates = Vec::new();
    let mut exponent = i % 127;
    loop {
        if conjugates.contains(&exponent) {
            break;
        }
        conjugates.push(exponent);
        exponent = (exponent * 2) % 127;
    }
    conjugates.into_iter().fold(Poly::one(), |acc, c| {
        let root = gf::alpha_pow(c);
        acc.mul(&Poly(vec![root, 1]))
    })
}

fn build_generator() -> Poly {
    let mut generator = Poly::one();
    let mut covered: Vec<u32> = Vec::new();
    for i in (1..=u32::from(crate::codec::TWO_T)).step_by(2) {
        if covered.contains(&i) {
            continue;
        }
        generator = generator.mul(&minimal_polynomial(i));
        let mut exponent = i;
        loop {
            if covered.contains(&exponent) {
                break;
            }
            covered.push(exponent);
            exponent = (exponent * 2) % 127;
        }
    }
    generator
}

static GENERATOR: OnceLock<Poly> = OnceLock::new();

/// The BCH(127,64,10) generator polynomial, computed once per process.
///
/// Degree is `127 - 64 = 63`; every coefficient is `0` or `1` since it is a
/// product of minimal polynomials over GF(2).
pub fn generator() -> &'static Poly {
    GENERATOR.get_or_init(build_generator)
}

/// Packs the (binary-valued) generator polynomial into a `u64` bitmask,
/// bit `i` holding the coefficient of `x^i`.
#[must_use]
pub fn generator_bits() -> u64 {
    generator()
        .0
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &c)| if c != 0 { acc | (1 << i) } else { acc })
}

#[cfg(test)]
mod tests {
    use super::{generator, generator_bits, minimal_polynomial, Poly};

    #[test]
    fn generator_has_degree_sixty_three() {
        assert_eq!(generator().degree(), Some(63));
    }

    #[test]
    fn generator_coefficients_are_binary() {
        for &c in &generator().0 {
            assert!(c == 0 || c == 1);
        }
    }

    #[test]
    fn generator_bits_round_trip_the_polynomial() {
        let bits = generator_bits();
        for (i, &c) in generator().0.iter().enumerate() {
            assert_eq!((bits >> i) & 1, u64::from(c));
        }
    }

    #[test]
    fn minimal_polynomial_has_the_root_as_a_zero() {
        let poly = minimal_polynomial(1);
        assert_eq!(poly.eval(crate::gf::alpha_pow(1)), 0);
    }

    #[test]
    fn addition_is_its_own_inverse() {
        let a = Poly(vec![1, 0, 1, 1]);
        let b = Poly(vec![0, 1, 1]);
        assert_eq!(a.add(&b).add(&b), a);
    }
}
