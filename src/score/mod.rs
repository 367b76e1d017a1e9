//! Comfort sub-scores and their weights.
//!
//! Each sub-score maps a candidate position to `0.0..=100.0`:
//!
//! - [`proximity_score`]: distance to the nearest occupant, mitigated by
//!   dividers.
//! - [`edge_score`]: preference for end-of-row positions.
//! - [`buffer_score`]: minimum-gap protocol compliance.
//! - [`collective_welfare`]: three-part lookahead measuring what a choice
//!   leaves behind for future arrivals.
//!
//! Sub-scores stay `f64` here; rounding to integer happens once, when the
//! selection engine assembles a breakdown. The weights below are fixed
//! constants with no configuration surface; the compile-time checks keep
//! each group summing to one.

mod buffer;
mod distance;
mod edge;
mod proximity;
mod welfare;

pub use buffer::buffer_score;
pub use distance::min_distance;
pub use edge::edge_score;
pub use proximity::proximity_score;
pub use welfare::{
    collective_welfare, next_user_viability, symmetry_preservation, two_user_lookahead,
    NextUserViability, SymmetryPreservation, TwoUserLookahead, WelfareDetail, WelfareScore,
};

/// Weight of the proximity sub-score in the composite.
pub const PROXIMITY_WEIGHT: f64 = 0.30;
/// Weight of the edge sub-score in the composite.
pub const EDGE_WEIGHT: f64 = 0.20;
/// Weight of the collective-welfare sub-score in the composite.
pub const WELFARE_WEIGHT: f64 = 0.35;
/// Weight of the buffer sub-score in the composite.
pub const BUFFER_WEIGHT: f64 = 0.15;

/// Weight of next-user viability within collective welfare.
pub const NEXT_USER_WEIGHT: f64 = 0.50;
/// Weight of the two-user lookahead within collective welfare.
pub const TWO_USER_WEIGHT: f64 = 0.30;
/// Weight of symmetry preservation within collective welfare.
pub const SYMMETRY_WEIGHT: f64 = 0.20;

const COMPOSITE_WEIGHT_SUM: f64 = PROXIMITY_WEIGHT + EDGE_WEIGHT + WELFARE_WEIGHT + BUFFER_WEIGHT;
const WELFARE_WEIGHT_SUM: f64 = NEXT_USER_WEIGHT + TWO_USER_WEIGHT + SYMMETRY_WEIGHT;

const _: () = assert!(COMPOSITE_WEIGHT_SUM > 1.0 - 1e-9 && COMPOSITE_WEIGHT_SUM < 1.0 + 1e-9);
const _: () = assert!(WELFARE_WEIGHT_SUM > 1.0 - 1e-9 && WELFARE_WEIGHT_SUM < 1.0 + 1e-9);
