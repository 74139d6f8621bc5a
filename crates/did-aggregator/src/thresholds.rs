//! Fallback quality admission thresholds.

use serde::{Deserialize, Serialize};

/// Minimum mean quality required to admit a fallback presentation at each
/// tier, keyed by how many fingers short of the full enrolled set the
/// presentation is.
///
/// `tier_one` gates presentations missing exactly one finger; `tier_two`
/// gates presentations missing two or more (down to the two-finger
/// floor). Defaults are the spec's `(70, 85)`. Callers may raise these to
/// tighten the security floor but must not lower them below the spec
/// defaults — [`FallbackThresholds::new`] enforces this by clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackThresholds {
    /// Minimum mean quality for a presentation missing exactly one
    /// finger (`enrolled_count - 1` fingers presented).
    pub tier_one: u8,
    /// Minimum mean quality for a presentation missing two or more
    /// fingers (`<= enrolled_count - 2` fingers presented).
    pub tier_two: u8,
}

impl Default for FallbackThresholds {
    fn default() -> Self {
        Self { tier_one: 70, tier_two: 85 }
    }
}

impl FallbackThresholds {
    /// Builds a threshold pair, clamping each value up to the spec
    /// default floor if a caller attempts to lower it.
    #[must_use]
    pub fn new(tier_one: u8, tier_two: u8) -> Self {
        let defaults = Self::default();
        Self { tier_one: tier_one.max(defaults.tier_one), tier_two: tier_two.max(defaults.tier_two) }
    }
}

#[cfg(test)]
mod tests {
    use super::FallbackThresholds;

    #[test]
    fn new_clamps_below_spec_defaults_upward() {
        let thresholds = FallbackThresholds::new(10, 20);
        assert_eq!(thresholds, FallbackThresholds::default());
    }

    #[test]
    fn new_accepts_stricter_thresholds() {
        let thresholds = FallbackThresholds::new(90, 95);
        assert_eq!(thresholds, FallbackThresholds { tier_one: 90, tier_two: 95 });
    }
}
