//! Candidate selection over a scored row.
//!
//! Combines the four sub-scores from [`crate::score`] into a weighted
//! composite for every free station, then applies the selection policy:
//!
//! 1. Prefer buffer-compliant, socially responsible stations.
//! 2. Fall back to any buffer-compliant station.
//! 3. When nothing satisfies the protocol, rank every free station and
//!    offer the least-bad option as a desperate measure.
//!
//! Antisocial stations — those that would strand the next arrival with no
//! acceptable choice — are excluded from the result whenever a better
//! alternative exists.
//!
//! # Key Types
//!
//! - [`Recommendation`]: the full outcome with per-station diagnostics
//! - [`StationScore`]: one station's composite and component breakdown
//! - [`Status`]: terminal classification of a run

mod engine;
mod types;

pub use engine::{recommend, recommend_positions, score_station, EXCLUSION_REASON};
pub use types::{Recommendation, ScoreBreakdown, StationScore, Status};
