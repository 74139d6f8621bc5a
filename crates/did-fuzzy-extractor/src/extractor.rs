//! Per-finger `Gen`/`Rep`: the fuzzy extractor pair built on the BCH secure
//! sketch and a keyed BLAKE2b hash.
//!
//! `Gen` draws fresh randomness, builds a BCH codeword, and publishes the
//! XOR offset between the codeword and the quantized vector as helper
//! data; `Rep` uses that offset plus a noisy vector to recover the
//! original codeword (and hence the key) whenever the noise is within the
//! code's correction radius.

use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use did_bch_codec::{self as bch, Bits127};
use did_quantizer::{FingerId, QuantizedVector};

use crate::error::FuzzyExtractorError;
use crate::helper::{HelperData, CODE_PARAMS_TAG, VERSION};
use crate::key::FingerKey;

/// BLAKE2b personalization for key derivation (`"fx.key.v1"` in spec
/// prose; padded to BLAKE2b's 16-byte personalization width).
const FX_KEY_PERSONALIZATION: &[u8; 16] = b"BioDID_FxKey_v1_";

/// BLAKE2b personalization for MAC-key derivation (`"fx.mac.v1"` in spec
/// prose).
const FX_MAC_PERSONALIZATION: &[u8; 16] = b"BioDID_FxMac_v1_";

/// Enrolls one finger: produces a fresh [`FingerKey`] and the
/// [`HelperData`] needed to reproduce it from a future, noisy reading of
/// the same finger.
///
/// `rng` must be cryptographically secure; it is the caller's
/// responsibility to supply one (this crate holds no RNG state of its
/// own, per the "RNG is injected by the caller" concurrency contract).
pub fn gen<R: RngCore + CryptoRng>(
    w: QuantizedVector,
    finger_id: FingerId,
    rng: &mut R,
) -> (FingerKey, HelperData) {
    let mut salt = [0u8; 32];
    rng.fill_bytes(&mut salt);
    let message = rng.next_u64();

    let codeword = bch::encode(message);
    let offset = (codeword ^ w.0).as_bytes16();

    let key = derive_key(message, finger_id, &salt);
    let mac_key = derive_mac_key(&salt, &key);

    let mut helper = HelperData {
        finger_id,
        salt,
        offset,
        mac: [0u8; 16],
        code_params_tag: CODE_PARAMS_TAG,
        version: VERSION,
    };
    helper.mac = compute_mac(&mac_key, &helper.mac_input());

    debug!(finger = finger_id.tag(), "generated finger key and helper data");
    (key, helper)
}

/// Reproduces a [`FingerKey`] from a (possibly noisy) quantized vector and
/// previously issued helper data.
///
/// # Errors
/// - [`FuzzyExtractorError::UnsupportedParams`] if the helper's version or
///   code parameter tag is not the one this crate supports.
/// - [`FuzzyExtractorError::TooNoisy`] if the BCH decoder cannot correct
///   the noise between `w_prime` and the enrollment vector.
/// - [`FuzzyExtractorError::Tampered`] if the recomputed MAC does not
///   match `helper.mac`.
pub fn rep(w_prime: QuantizedVector, helper: &HelperData) -> Result<FingerKey, FuzzyExtractorError> {
    if !helper.has_supported_params() {
        warn!(finger = helper.finger_id.tag(), "helper uses unsupported version or code params");
        return Err(FuzzyExtractorError::UnsupportedParams);
    }

    let noisy_codeword = Bits127::from_bytes16(helper.offset) ^ w_prime.0;
    let decoded = bch::decode(noisy_codeword).map_err(|_| {
        debug!(finger = helper.finger_id.tag(), "reproduction exceeded BCH correction capacity");
        FuzzyExtractorError::TooNoisy
    })?;

    let message = bch::message_bits(decoded.corrected_bits);
    let key = derive_key(message, helper.finger_id, &helper.salt);
    let mac_key = derive_mac_key(&helper.salt, &key);
    let expected_mac = compute_mac(&mac_key, &helper.mac_input());

    if expected_mac.ct_eq(&helper.mac).unwrap_u8() != 1 {
        // `key` drops here and is zeroized: no Fail path ever returns
        // partial secret material.
        warn!(finger = helper.finger_id.tag(), "helper data failed MAC verification");
        return Err(FuzzyExtractorError::Tampered);
    }

    Ok(key)
}

fn derive_key(message: u64, finger_id: FingerId, salt: &[u8; 32]) -> FingerKey {
    let hash = blake2b_simd::Params::new()
        .hash_length(32)
        .personal(FX_KEY_PERSONALIZATION)
        .to_state()
        .update(salt)
        .update(&message.to_le_bytes())
        .update(&[finger_tag_byte(finger_id)])
        .finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(hash.as_bytes());
    FingerKey::new(bytes)
}

fn derive_mac_key(salt: &[u8; 32], key: &FingerKey) -> [u8; 16] {
    let hash = blake2b_simd::Params::new()
        .hash_length(16)
        .personal(FX_MAC_PERSONALIZATION)
        .to_state()
        .update(salt)
        .update(key.as_bytes())
        .finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(hash.as_bytes());
    bytes
}

fn compute_mac(mac_key: &[u8; 16], input: &[u8]) -> [u8; 16] {
    let hash = blake2b_simd::Params::new()
        .hash_length(16)
        .key(mac_key)
        .to_state()
        .update(input)
        .finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(hash.as_bytes());
    bytes
}

/// Mirrors [`crate::helper::HelperData::mac_input`]'s private finger-tag
/// encoding; duplicated here rather than exposed publicly since only key
/// derivation needs it outside `helper.rs`.
const fn finger_tag_byte(finger_id: FingerId) -> u8 {
    match finger_id {
        FingerId::LThumb => 0,
        FingerId::LIndex => 1,
        FingerId::LMiddle => 2,
        FingerId::LRing => 3,
        FingerId::LPinky => 4,
        FingerId::RThumb => 5,
        FingerId::RIndex => 6,
        FingerId::RMiddle => 7,
        FingerId::RRing => 8,
        FingerId::RPinky => 9,
    }
}
