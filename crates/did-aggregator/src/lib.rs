//! Combines up to ten per-finger keys into a single master key.
//!
//! XOR aggregation: commutative, associative, and the algebraic basis for
//! O(1) rotation and revocation (see [`aggregator::rotate`] and
//! [`aggregator::revoke`]). Quality-weighted fallback admits a subset of
//! fingers when the full enrolled set cannot be presented, gated by
//! [`FallbackThresholds`].

pub mod aggregator;
pub mod error;
pub mod result;
pub mod thresholds;

pub use aggregator::{aggregate, revoke, rotate};
pub use error::AggregatorError;
pub use result::AggregationResult;
pub use thresholds::FallbackThresholds;
