//! GF(2^7) arithmetic, built once from the primitive polynomial
//! `x^7 + x + 1` (`0b1000_0011`).
//!
//! Elements are represented as `u8` values in `0..127`; field addition is
//! XOR. Multiplication and inversion go through log/exp tables so no
//! branching occurs on the values being multiplied — syndromes and received
//! codeword bits are public once helper data is public, so table lookups on
//! them do not leak secret information.

use std::sync::OnceLock;

/// `2^7 - 1`: both the multiplicative group order and the BCH code length.
pub const FIELD_NONZERO: usize = 127;

const PRIMITIVE_POLY: u16 = 0b1000_0011; // x^7 + x + 1

struct Tables {
    exp: [u8; FIELD_NONZERO * 2],
    log: [u8; 128],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn build_tables() -> Tables {
    let mut exp = [0u8; FIELD_NONZERO * 2];
    let mut log = [0u8; 128];
    let mut value: u16 = 1;
    for (i, slot) in exp.iter_mut().take(FIELD_NONZERO).enumerate() {
        *slot = u8::try_from(value).expect("GF(2^7) element fits in 7 bits");
        log[value as usize] = u8::try_from(i).expect("exponent fits in u8");
        value <<= 1;
        if value & 0x80 != 0 {
            value ^= PRIMITIVE_POLY;
        }
    }
    // Duplicate the table so `exp[i + j]` never needs a modulo for i, j < 127.
    for i in 0..FIELD_NONZERO {
        exp[i + FIELD_NONZERO] = exp[i];
    }
    Tables { exp, log }
}

fn tables() -> &'static Tables {
    TABLES.get_or_init(build_tables)
}

/// The primitive element `alpha` raised to `exponent` (taken mod 127).
#[must_use]
pub fn alpha_pow(exponent: u32) -> u8 {
    let reduced = (exponent as usize) % FIELD_NONZERO;
    tables().exp[reduced]
}

/// Field multiplication `a * b`.
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = tables();
    let sum = u32::from(t.log[a as usize]) + u32::from(t.log[b as usize]);
    t.exp[sum as usize % FIELD_NONZERO]
}

/// Field exponentiation `base^power`.
#[must_use]
pub fn pow(base: u8, power: u32) -> u8 {
    if base == 0 {
        return u8::from(power == 0);
    }
    let t = tables();
    let log_base = u32::from(t.log[base as usize]);
    let exponent = (log_base * power) as usize % FIELD_NONZERO;
    t.exp[exponent]
}

/// Multiplicative inverse of a nonzero element.
#[must_use]
pub fn inv(a: u8) -> Option<u8> {
    if a == 0 {
        return None;
    }
    let t = tables();
    let log_a = usize::from(t.log[a as usize]);
    Some(t.exp[(FIELD_NONZERO - log_a) % FIELD_NONZERO])
}

/// Field division `a / b`.
#[must_use]
pub fn div(a: u8, b: u8) -> Option<u8> {
    inv(b).map(|inv_b| mul(a, inv_b))
}
