//! Property tests for the selection engine.
//!
//! Exercises arbitrary row configurations and checks the structural
//! invariants every recommendation must satisfy, independent of the exact
//! scores involved.

use proptest::prelude::*;
use urinal_protocol::layout::Layout;
use urinal_protocol::score::proximity_score;
use urinal_protocol::select::{recommend, Status};

fn layouts() -> impl Strategy<Value = Layout> {
    (1u32..=24).prop_flat_map(|n| {
        (
            prop::collection::btree_set(1..=n, 0..=(n as usize)),
            any::<bool>(),
        )
            .prop_map(move |(occupied, dividers)| {
                Layout::new(n, occupied.into_iter().collect::<Vec<_>>(), dividers).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn recommend_is_deterministic(layout in layouts()) {
        prop_assert_eq!(recommend(&layout), recommend(&layout));
    }

    #[test]
    fn full_rows_and_only_full_rows_terminate(layout in layouts()) {
        let result = recommend(&layout);
        prop_assert_eq!(result.status == Status::Full, layout.is_full());
        prop_assert_eq!(result.recommendation.is_none(), layout.is_full());
    }

    #[test]
    fn winner_is_free_and_never_excluded(layout in layouts()) {
        let result = recommend(&layout);
        if let Some(winner) = result.recommendation {
            prop_assert!(layout.free_positions().contains(&winner));
            let best = result.best_score.unwrap();
            prop_assert_eq!(best.position, winner);
            prop_assert!(!best.excluded);
            prop_assert!(result.scores.iter().all(|s| !s.excluded));
        }
    }

    #[test]
    fn all_scores_cover_free_positions_in_order(layout in layouts()) {
        let result = recommend(&layout);
        let positions: Vec<u32> = result.all_scores.iter().map(|s| s.position).collect();
        prop_assert_eq!(positions, layout.free_positions());
    }

    #[test]
    fn candidates_are_sorted_best_first(layout in layouts()) {
        let result = recommend(&layout);
        for pair in result.scores.windows(2) {
            prop_assert!(pair[0].composite >= pair[1].composite);
            if pair[0].composite == pair[1].composite {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn breakdown_scores_stay_in_range(layout in layouts()) {
        let result = recommend(&layout);
        for score in &result.all_scores {
            prop_assert!(score.composite <= 100);
            prop_assert!(score.breakdown.proximity <= 100);
            prop_assert!(score.breakdown.edge <= 100);
            prop_assert!(score.breakdown.collective_welfare <= 100);
            prop_assert!(score.breakdown.buffer <= 100);

            let detail = &score.breakdown.collective_welfare_details;
            prop_assert!((0.0..=100.0).contains(&detail.next_user_viability.score));
            prop_assert!((0.0..=100.0).contains(&detail.two_user_lookahead.score));
            prop_assert!((0.0..=100.0).contains(&detail.symmetry_preservation.score));
        }
    }

    #[test]
    fn excluded_options_are_exactly_the_stranding_ones(layout in layouts()) {
        let result = recommend(&layout);
        for excluded in &result.excluded_options {
            prop_assert!(excluded.excluded);
            prop_assert!(excluded.exclusion_reason.is_some());
            let viability = &excluded.breakdown.collective_welfare_details.next_user_viability;
            prop_assert_eq!(viability.acceptable, 0);
            prop_assert!(viability.total > 0);
        }
    }

    #[test]
    fn empty_rows_recommend_an_end(n in 2u32..=24) {
        let layout = Layout::new(n, vec![], false).unwrap();
        let result = recommend(&layout);
        prop_assert_eq!(result.status, Status::Optimal);
        let winner = result.recommendation.unwrap();
        prop_assert!(winner == 1 || winner == n);
    }

    #[test]
    fn proximity_is_monotone_in_distance(occupant in 1u32..=30, dividers in any::<bool>()) {
        let occupied = [occupant];
        let mut previous = f64::NEG_INFINITY;
        for distance in 1u32..=6 {
            let position = occupant + distance;
            let score = proximity_score(position, &occupied, dividers);
            prop_assert!(score >= previous);
            previous = score;
        }
    }
}
