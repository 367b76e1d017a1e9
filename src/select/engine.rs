//! Composite scoring and the selection policy.
//!
//! [`recommend`] is the core entry point: it scores every free station,
//! partitions the candidates by buffer compliance and social
//! responsibility, applies the exclusion override, and walks the status
//! ladder to produce a [`Recommendation`].

use log::{debug, trace};

use super::types::{Recommendation, ScoreBreakdown, StationScore, Status};
use crate::describe::score_description;
use crate::layout::{Layout, LayoutError};
use crate::score::{
    buffer_score, collective_welfare, edge_score, min_distance, proximity_score, BUFFER_WEIGHT,
    EDGE_WEIGHT, PROXIMITY_WEIGHT, WELFARE_WEIGHT,
};

/// Reason attached to stations suppressed by the override policy.
pub const EXCLUSION_REASON: &str =
    "This position would leave zero acceptable options for the next user. Don't be that guy.";

const FULL_MESSAGE: &str = "Facilities at maximum capacity. Recommend strategic retreat to \
     alternative facilities or adoption of patience-based waiting protocol.";

const OPTIMAL_MESSAGE: &str =
    "Congratulations — You have achieved the theoretical maximum comfort state.";

/// Scores a single free position against the current occupancy.
///
/// Sub-scores are computed in `f64` and rounded once, here, when the
/// breakdown is assembled. The collective-welfare component is rounded
/// before it enters the composite.
pub fn score_station(
    position: u32,
    occupied: &[u32],
    station_count: u32,
    dividers: bool,
) -> StationScore {
    let proximity = proximity_score(position, occupied, dividers);
    let edge = edge_score(position, station_count);
    let welfare = collective_welfare(position, occupied, station_count);
    let buffer = buffer_score(position, occupied, dividers);

    let composite = proximity * PROXIMITY_WEIGHT
        + edge * EDGE_WEIGHT
        + f64::from(welfare.combined) * WELFARE_WEIGHT
        + buffer * BUFFER_WEIGHT;

    StationScore {
        position,
        composite: composite.round() as u8,
        breakdown: ScoreBreakdown {
            proximity: proximity.round() as u8,
            edge: edge.round() as u8,
            collective_welfare: welfare.combined,
            collective_welfare_details: welfare.detail,
            buffer: buffer.round() as u8,
        },
        excluded: false,
        exclusion_reason: None,
    }
}

/// Validates a raw configuration and runs the selection policy on it.
///
/// Convenience wrapper around [`Layout::new`] + [`recommend`] for callers
/// holding unvalidated input.
pub fn recommend_positions(
    station_count: u32,
    occupied: impl Into<Vec<u32>>,
    dividers: bool,
) -> Result<Recommendation, LayoutError> {
    let layout = Layout::new(station_count, occupied, dividers)?;
    Ok(recommend(&layout))
}

/// Runs the selection policy and returns the best free station with full
/// diagnostics.
///
/// The candidate pool is chosen in priority order: buffer-compliant and
/// socially responsible stations, then any buffer-compliant station, then
/// (when nothing satisfies the protocol at all) every free station.
/// Antisocial stations are only marked excluded when a compliant, socially
/// responsible alternative exists — when every option is antisocial the
/// override would eliminate all choices, so it is suppressed. Ties on the
/// composite break toward the lowest position.
pub fn recommend(layout: &Layout) -> Recommendation {
    let station_count = layout.station_count();
    let occupied = layout.occupied();
    let dividers = layout.dividers();

    let free = layout.free_positions();
    if free.is_empty() {
        return Recommendation {
            recommendation: None,
            status: Status::Full,
            message: FULL_MESSAGE.to_string(),
            scores: Vec::new(),
            all_scores: Vec::new(),
            excluded_options: Vec::new(),
            best_score: None,
        };
    }

    let mut all_scores: Vec<StationScore> = free
        .iter()
        .map(|&position| score_station(position, occupied, station_count, dividers))
        .collect();

    for score in &all_scores {
        trace!(
            "station {}: composite {} (proximity {}, edge {}, welfare {}, buffer {})",
            score.position,
            score.composite,
            score.breakdown.proximity,
            score.breakdown.edge,
            score.breakdown.collective_welfare,
            score.breakdown.buffer
        );
    }

    // Buffer compliance: two or more away from every occupant, or dividers
    // present. Trivially satisfied when the row is empty.
    let respects_buffer = |score: &StationScore| {
        min_distance(score.position, occupied).is_none_or(|d| d >= 2) || dividers
    };

    // Social responsibility: the choice leaves at least one acceptable
    // station for the next arrival, or leaves none free at all.
    let is_antisocial = |score: &StationScore| {
        let viability = &score.breakdown.collective_welfare_details.next_user_viability;
        viability.acceptable == 0 && viability.total > 0
    };

    let buffer_compliant: Vec<usize> = (0..all_scores.len())
        .filter(|&i| respects_buffer(&all_scores[i]))
        .collect();
    let antisocial: Vec<usize> = (0..all_scores.len())
        .filter(|&i| is_antisocial(&all_scores[i]))
        .collect();
    let compliant_and_social: Vec<usize> = buffer_compliant
        .iter()
        .copied()
        .filter(|i| !antisocial.contains(i))
        .collect();

    // The override only fires when a compliant, socially responsible
    // alternative exists; otherwise the user has no real choice and
    // nothing is marked.
    let mut excluded_options = Vec::new();
    if !compliant_and_social.is_empty() && !antisocial.is_empty() {
        for &i in &antisocial {
            let marked = all_scores[i].with_exclusion(EXCLUSION_REASON);
            excluded_options.push(marked.clone());
            all_scores[i] = marked;
        }
        debug!(
            "excluded {} antisocial option(s): {:?}",
            excluded_options.len(),
            excluded_options
                .iter()
                .map(|s| s.position)
                .collect::<Vec<_>>()
        );
    }

    let candidate_indices: Vec<usize> = if !buffer_compliant.is_empty() {
        if !compliant_and_social.is_empty() {
            compliant_and_social
        } else {
            buffer_compliant
        }
    } else {
        debug!("no buffer-compliant stations; falling back to every free station");
        (0..all_scores.len()).collect()
    };

    let mut candidates: Vec<StationScore> = candidate_indices
        .into_iter()
        .map(|i| all_scores[i].clone())
        .collect();
    candidates.sort_by(|a, b| {
        b.composite
            .cmp(&a.composite)
            .then(a.position.cmp(&b.position))
    });

    let best = candidates[0].clone();
    debug!(
        "recommending station {} (composite {})",
        best.position, best.composite
    );

    // Status ladder, highest priority first.
    let all_violate = !dividers
        && !occupied.is_empty()
        && all_scores
            .iter()
            .all(|s| min_distance(s.position, occupied) == Some(1));

    let (status, message) = if all_violate {
        (
            Status::Desperate,
            format!(
                "⚠️ PROTOCOL VIOLATION: All options are adjacent to occupied urinals. However, \
                 if you are desperate or if there are people waiting behind you (and you wish \
                 to avoid appearing as though you are merely loitering), Position #{} \
                 represents the least suboptimal choice.",
                best.position
            ),
        )
    } else if occupied.is_empty() {
        (Status::Optimal, OPTIMAL_MESSAGE.to_string())
    } else if !excluded_options.is_empty() {
        (
            Status::SociallyAware,
            score_description(best.composite).to_string(),
        )
    } else {
        (
            Status::Normal,
            score_description(best.composite).to_string(),
        )
    };

    Recommendation {
        recommendation: Some(best.position),
        status,
        message,
        scores: candidates,
        all_scores,
        excluded_options,
        best_score: Some(best),
    }
}
