//! Collective-welfare sub-score.
//!
//! Every component evaluates the state reached by provisionally adding the
//! candidate to the occupied set, then asks what that state leaves behind
//! for future arrivals:
//!
//! - [`next_user_viability`]: does at least one acceptable station (two or
//!   more away from every occupant) remain for the next arrival?
//! - [`two_user_lookahead`]: can a second *and* a third arrival both still
//!   find an acceptable station?
//! - [`symmetry_preservation`]: how evenly does the augmented set divide
//!   the row, walls included?
//!
//! The lookahead is a memo-free O(k²) scan over candidate next/third
//! positions. At the row sizes this crate targets that is far cheaper than
//! any caching layer would be; the scan is intentionally written as plain
//! bounded loops.

use super::distance::min_distance;
use super::{NEXT_USER_WEIGHT, SYMMETRY_WEIGHT, TWO_USER_WEIGHT};

/// Minimum distance an occupant can be from a station for that station to
/// still count as acceptable.
const ACCEPTABLE_DISTANCE: u32 = 2;

/// Outcome of the next-user viability check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct NextUserViability {
    /// Component score in `0.0..=100.0`.
    pub score: f64,
    /// Stations that remain acceptable for the next arrival.
    pub acceptable: usize,
    /// Stations that remain free at all.
    pub total: usize,
}

/// Outcome of the two-user lookahead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct TwoUserLookahead {
    /// Component score in `0.0..=100.0`.
    pub score: f64,
    /// Best number of acceptable stations a third arrival can be left
    /// with, across every acceptable choice the second arrival could make.
    pub max_second_user_options: usize,
}

/// Outcome of the symmetry-preservation measure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct SymmetryPreservation {
    /// Component score in `0.0..=100.0`.
    pub score: f64,
    /// Wall-inclusive gap sequence of the augmented occupied set, left to
    /// right.
    pub gaps: Vec<u32>,
}

/// The three welfare components together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct WelfareDetail {
    /// Next-user viability component.
    pub next_user_viability: NextUserViability,
    /// Two-user lookahead component.
    pub two_user_lookahead: TwoUserLookahead,
    /// Symmetry-preservation component.
    pub symmetry_preservation: SymmetryPreservation,
}

/// Combined collective-welfare score.
///
/// The combined value is rounded to an integer here, before it enters the
/// top-level composite; the components keep their unrounded scores in
/// [`WelfareDetail`].
#[derive(Debug, Clone, PartialEq)]
pub struct WelfareScore {
    /// Weighted combination of the three components, rounded to `0..=100`.
    pub combined: u8,
    /// Per-component results.
    pub detail: WelfareDetail,
}

/// The occupied set with the candidate provisionally added, sorted.
fn augmented(candidate: u32, occupied: &[u32]) -> Vec<u32> {
    let mut set = occupied.to_vec();
    set.push(candidate);
    set.sort_unstable();
    set
}

/// Free positions once `augmented_occupied` is taken, ascending.
fn remaining_positions(station_count: u32, augmented_occupied: &[u32]) -> Vec<u32> {
    (1..=station_count)
        .filter(|p| !augmented_occupied.contains(p))
        .collect()
}

fn is_acceptable(position: u32, occupied: &[u32]) -> bool {
    min_distance(position, occupied).is_some_and(|d| d >= ACCEPTABLE_DISTANCE)
}

/// Next-user viability: what the candidate leaves for the next arrival.
///
/// Taking the last station carries no downstream responsibility and scores
/// 100. Leaving free stations but none acceptable is the critical failure
/// and scores 0. Otherwise the score scales with the proportion of
/// remaining stations that stay acceptable.
pub fn next_user_viability(
    candidate: u32,
    occupied: &[u32],
    station_count: u32,
) -> NextUserViability {
    let augmented_occupied = augmented(candidate, occupied);
    let remaining = remaining_positions(station_count, &augmented_occupied);

    if remaining.is_empty() {
        return NextUserViability {
            score: 100.0,
            acceptable: 0,
            total: 0,
        };
    }

    let acceptable = remaining
        .iter()
        .filter(|&&p| is_acceptable(p, &augmented_occupied))
        .count();

    if acceptable == 0 {
        return NextUserViability {
            score: 0.0,
            acceptable: 0,
            total: remaining.len(),
        };
    }

    let proportion = acceptable as f64 / remaining.len() as f64;
    NextUserViability {
        score: 30.0 + proportion * 70.0,
        acceptable,
        total: remaining.len(),
    }
}

/// Two-user lookahead: can two more arrivals both be comfortable?
///
/// For every acceptable position the next arrival could take, counts the
/// stations that would remain acceptable for a third arrival, and keeps
/// the best case. Saturates once two or more third-arrival options exist.
pub fn two_user_lookahead(
    candidate: u32,
    occupied: &[u32],
    station_count: u32,
) -> TwoUserLookahead {
    let augmented_occupied = augmented(candidate, occupied);
    let remaining = remaining_positions(station_count, &augmented_occupied);

    let acceptable_for_next: Vec<u32> = remaining
        .iter()
        .copied()
        .filter(|&p| is_acceptable(p, &augmented_occupied))
        .collect();

    if acceptable_for_next.is_empty() {
        return TwoUserLookahead {
            score: 0.0,
            max_second_user_options: 0,
        };
    }

    let mut max_options = 0;
    for &next in &acceptable_for_next {
        let after_next = augmented(next, &augmented_occupied);
        let options = remaining
            .iter()
            .filter(|&&p| p != next && is_acceptable(p, &after_next))
            .count();
        max_options = max_options.max(options);
    }

    if max_options == 0 && remaining.len() > 1 {
        // A second arrival fits but a third cannot.
        return TwoUserLookahead {
            score: 50.0,
            max_second_user_options: 0,
        };
    }

    TwoUserLookahead {
        score: 50.0 + (max_options.min(2) as f64) * 25.0,
        max_second_user_options: max_options,
    }
}

/// Symmetry preservation: how evenly the augmented set divides the row.
///
/// The gap sequence includes the runs against both walls. A mean gap of
/// zero means there is no room left to be uneven; otherwise the score is
/// driven by the coefficient of variation of the gaps.
pub fn symmetry_preservation(
    candidate: u32,
    occupied: &[u32],
    station_count: u32,
) -> SymmetryPreservation {
    let augmented_occupied = augmented(candidate, occupied);

    let mut gaps = Vec::with_capacity(augmented_occupied.len() + 1);
    gaps.push(augmented_occupied[0] - 1);
    for pair in augmented_occupied.windows(2) {
        gaps.push(pair[1] - pair[0] - 1);
    }
    gaps.push(station_count - augmented_occupied[augmented_occupied.len() - 1]);

    let mean = gaps.iter().sum::<u32>() as f64 / gaps.len() as f64;
    if mean == 0.0 {
        return SymmetryPreservation { score: 100.0, gaps };
    }

    let variance = gaps
        .iter()
        .map(|&g| (g as f64 - mean).powi(2))
        .sum::<f64>()
        / gaps.len() as f64;
    let cv = variance.sqrt() / mean;
    let score = ((1.0 - cv) * 100.0).clamp(0.0, 100.0);

    SymmetryPreservation { score, gaps }
}

/// Weighted combination of the three welfare components.
pub fn collective_welfare(candidate: u32, occupied: &[u32], station_count: u32) -> WelfareScore {
    let next_user = next_user_viability(candidate, occupied, station_count);
    let two_user = two_user_lookahead(candidate, occupied, station_count);
    let symmetry = symmetry_preservation(candidate, occupied, station_count);

    let combined = next_user.score * NEXT_USER_WEIGHT
        + two_user.score * TWO_USER_WEIGHT
        + symmetry.score * SYMMETRY_WEIGHT;

    WelfareScore {
        combined: combined.round() as u8,
        detail: WelfareDetail {
            next_user_viability: next_user,
            two_user_lookahead: two_user,
            symmetry_preservation: symmetry,
        },
    }
}
