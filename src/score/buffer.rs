//! Buffer-protocol sub-score.
//!
//! The buffer protocol asks for at least one free station between
//! occupants. Scoring is a step function of the minimum distance to the
//! nearest occupant: adjacency is a protocol violation (softened by
//! dividers), a single buffer is minimum compliance, two or more buffers
//! are comfortable compliance.

use super::distance::min_distance;

/// Buffer-compliance score for a free position, in `0.0..=100.0`.
pub fn buffer_score(position: u32, occupied: &[u32], dividers: bool) -> f64 {
    match min_distance(position, occupied) {
        None => 100.0,
        Some(1) => {
            if dividers {
                50.0
            } else {
                0.0
            }
        }
        Some(2) => 70.0,
        Some(_) => 100.0,
    }
}
