//! Result types produced by the selection engine.

use crate::score::WelfareDetail;

/// Terminal classification of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub enum Status {
    /// The row was empty; the theoretical maximum comfort state.
    Optimal,
    /// A regular recommendation with no special conditions.
    Normal,
    /// Antisocial options existed and were excluded in favour of better
    /// alternatives.
    SociallyAware,
    /// Every free station violates the buffer protocol; the least-bad
    /// option is offered anyway.
    Desperate,
    /// No free stations at all.
    Full,
}

/// Rounded per-component scores for one station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct ScoreBreakdown {
    /// Proximity sub-score, rounded to `0..=100`.
    pub proximity: u8,
    /// Edge sub-score, rounded to `0..=100`.
    pub edge: u8,
    /// Combined collective-welfare sub-score, rounded to `0..=100`.
    pub collective_welfare: u8,
    /// Per-component welfare results, unrounded.
    pub collective_welfare_details: WelfareDetail,
    /// Buffer sub-score, rounded to `0..=100`.
    pub buffer: u8,
}

/// A free station with its composite score and full breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct StationScore {
    /// Station position, `1`-based from the left.
    pub position: u32,
    /// Weighted composite, rounded to `0..=100`.
    pub composite: u8,
    /// Per-component scores.
    pub breakdown: ScoreBreakdown,
    /// Whether the override policy excluded this station.
    pub excluded: bool,
    /// Why the station was excluded, when it was.
    pub exclusion_reason: Option<&'static str>,
}

impl StationScore {
    /// Returns a copy of this score marked excluded.
    ///
    /// Scores are never mutated in place: the same logical entry can be
    /// referenced from several result lists, so exclusion is applied by
    /// rebuilding the record.
    pub fn with_exclusion(&self, reason: &'static str) -> Self {
        Self {
            excluded: true,
            exclusion_reason: Some(reason),
            ..self.clone()
        }
    }
}

/// Full outcome of a selection run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Recommendation {
    /// The recommended position, or `None` when the row is full.
    pub recommendation: Option<u32>,
    /// Terminal classification.
    pub status: Status,
    /// Human-readable advisory for the status and winning score.
    pub message: String,
    /// Candidate stations only, sorted best first.
    pub scores: Vec<StationScore>,
    /// Every free station in ascending position order, exclusion flags
    /// applied.
    pub all_scores: Vec<StationScore>,
    /// Stations suppressed by the override policy.
    pub excluded_options: Vec<StationScore>,
    /// The winning station's full score record.
    pub best_score: Option<StationScore>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{NextUserViability, SymmetryPreservation, TwoUserLookahead};

    fn sample_score() -> StationScore {
        StationScore {
            position: 4,
            composite: 55,
            breakdown: ScoreBreakdown {
                proximity: 50,
                edge: 0,
                collective_welfare: 60,
                collective_welfare_details: WelfareDetail {
                    next_user_viability: NextUserViability {
                        score: 65.0,
                        acceptable: 1,
                        total: 2,
                    },
                    two_user_lookahead: TwoUserLookahead {
                        score: 50.0,
                        max_second_user_options: 0,
                    },
                    symmetry_preservation: SymmetryPreservation {
                        score: 70.0,
                        gaps: vec![1, 2],
                    },
                },
                buffer: 70,
            },
            excluded: false,
            exclusion_reason: None,
        }
    }

    #[test]
    fn test_with_exclusion_leaves_original_untouched() {
        let original = sample_score();
        let excluded = original.with_exclusion("blocked");

        assert!(!original.excluded);
        assert!(original.exclusion_reason.is_none());
        assert!(excluded.excluded);
        assert_eq!(excluded.exclusion_reason, Some("blocked"));
        assert_eq!(excluded.position, original.position);
        assert_eq!(excluded.composite, original.composite);
        assert_eq!(excluded.breakdown, original.breakdown);
    }
}
