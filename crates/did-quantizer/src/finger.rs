//! The ten fixed finger positions.

use serde::{Deserialize, Serialize};

/// One of the ten enrollable finger positions.
///
/// A fieldless enum rather than a string: every call site that handles
/// fingers matches exhaustively, so adding a position is a compile error
/// everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FingerId {
    /// Left thumb.
    LThumb,
    /// Left index finger.
    LIndex,
    /// Left middle finger.
    LMiddle,
    /// Left ring finger.
    LRing,
    /// Left pinky.
    LPinky,
    /// Right thumb.
    RThumb,
    /// Right index finger.
    RIndex,
    /// Right middle finger.
    RMiddle,
    /// Right ring finger.
    RRing,
    /// Right pinky.
    RPinky,
}

impl FingerId {
    /// All ten positions, in a fixed canonical order used wherever finger
    /// ids must be ordered deterministically (e.g. the aggregation
    /// commitment input in `did-coordinator`).
    pub const ALL: [FingerId; 10] = [
        FingerId::LThumb,
        FingerId::LIndex,
        FingerId::LMiddle,
        FingerId::LRing,
        FingerId::LPinky,
        FingerId::RThumb,
        FingerId::RIndex,
        FingerId::RMiddle,
        FingerId::RRing,
        FingerId::RPinky,
    ];

    /// A short stable tag used in serialized forms and log output.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            FingerId::LThumb => "l_thumb",
            FingerId::LIndex => "l_index",
            FingerId::LMiddle => "l_middle",
            FingerId::LRing => "l_ring",
            FingerId::LPinky => "l_pinky",
            FingerId::RThumb => "r_thumb",
            FingerId::RIndex => "r_index",
            FingerId::RMiddle => "r_middle",
            FingerId::RRing => "r_ring",
            FingerId::RPinky => "r_pinky",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FingerId;

    #[test]
    fn all_lists_exactly_ten_distinct_fingers() {
        let mut tags: Vec<&str> = FingerId::ALL.iter().map(|f| f.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), 10);
    }
}
