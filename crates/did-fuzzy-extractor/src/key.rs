//! The 32-byte secret key produced by [`crate::gen`] and [`crate::rep`].

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A per-finger secret key.
///
/// Opaque secret material: compared in constant time, zeroized on drop,
/// and never rendered through `Debug` (the redacted placeholder is
/// printed instead, matching `qudag_crypto`'s treatment of key material).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FingerKey([u8; 32]);

impl FingerKey {
    /// Wraps 32 bytes of key material.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Borrows the underlying bytes.
    ///
    /// Callers that copy this out of the wrapper take on the
    /// responsibility of zeroizing their own copy.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// XORs two keys, producing a new key (used by the aggregator and by
    /// rotation/revocation — see `did-aggregator`).
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let mut out = [0u8; 32];
        for (dst, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *dst = a ^ b;
        }
        Self(out)
    }
}

impl PartialEq for FingerKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for FingerKey {}

impl fmt::Debug for FingerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FingerKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::FingerKey;

    #[test]
    fn equal_keys_compare_equal() {
        let a = FingerKey::new([7u8; 32]);
        let b = FingerKey::new([7u8; 32]);
        assert_eq!(a, b);
    }

    #[test]
    fn xor_is_its_own_inverse() {
        let a = FingerKey::new([1u8; 32]);
        let b = FingerKey::new([2u8; 32]);
        let c = a.xor(&b);
        assert_eq!(c.xor(&b), a);
    }

    #[test]
    fn debug_never_prints_key_bytes() {
        let key = FingerKey::new([0xabu8; 32]);
        assert_eq!(format!("{key:?}"), "FingerKey(..)");
    }
}
