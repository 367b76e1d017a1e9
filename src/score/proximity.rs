//! Proximity sub-score.
//!
//! Penalizes closeness to occupants: an empty row scores 100, an adjacent
//! occupant scores 0, and each extra station of separation is worth 50
//! points up to the cap. A candidate hemmed in on both sides carries a
//! compounded-discomfort multiplier, and dividers move any sub-100 score
//! halfway back toward 100 — they mitigate proximity stress but never
//! erase it.

use super::distance::min_distance;

/// Proximity score for a free position, in `0.0..=100.0` (unrounded).
pub fn proximity_score(position: u32, occupied: &[u32], dividers: bool) -> f64 {
    let Some(distance) = min_distance(position, occupied) else {
        return 100.0;
    };

    let mut score = ((distance as f64 - 1.0) * 50.0).clamp(0.0, 100.0);

    let left_occupied = occupied.iter().any(|&occ| occ + 1 == position);
    let right_occupied = occupied.iter().any(|&occ| occ == position + 1);
    if left_occupied && right_occupied {
        score *= 0.67;
    }

    if dividers && score < 100.0 {
        score += (100.0 - score) * 0.5;
    }

    score
}
