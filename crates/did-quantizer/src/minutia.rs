//! Minutiae and finger templates as supplied by an external extractor.

use serde::{Deserialize, Serialize};

use crate::finger::FingerId;

/// A single fingerprint minutia: a ridge ending or bifurcation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minutia {
    /// X coordinate in device pixels.
    pub x: u32,
    /// Y coordinate in device pixels.
    pub y: u32,
    /// Ridge angle in degrees, `0..360`.
    pub theta_deg: u16,
}

impl Minutia {
    /// Builds a minutia, wrapping `theta_deg` into `0..360`.
    #[must_use]
    pub const fn new(x: u32, y: u32, theta_deg: u16) -> Self {
        Self { x, y, theta_deg: theta_deg % 360 }
    }
}

/// A labeled collection of minutiae for one finger, with a sensor-reported
/// quality score.
///
/// The ordering of `minutiae` is irrelevant: [`crate::quantize`] is a pure,
/// order-independent function of the set of minutiae.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerTemplate {
    /// Which finger this template was scanned from.
    pub finger_id: FingerId,
    /// The extracted minutiae. Order and duplicates do not affect
    /// quantization.
    pub minutiae: Vec<Minutia>,
    /// Sensor-reported quality in `0..=100`; higher is better.
    pub quality: u8,
}

impl FingerTemplate {
    /// Builds a template, clamping `quality` into `0..=100`.
    #[must_use]
    pub fn new(finger_id: FingerId, minutiae: Vec<Minutia>, quality: u8) -> Self {
        Self { finger_id, minutiae, quality: quality.min(100) }
    }
}
