//! Edge-position sub-score.

/// Edge preference for a position, independent of occupancy.
///
/// End positions score 100, positions adjacent to an end score 50,
/// everything else 0. End positions are checked first, so in rows of
/// three or fewer (where "adjacent to an end" coincides with an end)
/// the end rule wins.
pub fn edge_score(position: u32, station_count: u32) -> f64 {
    if position == 1 || position == station_count {
        100.0
    } else if position == 2 || position + 1 == station_count {
        50.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_score_highest() {
        assert_eq!(edge_score(1, 7), 100.0);
        assert_eq!(edge_score(7, 7), 100.0);
    }

    #[test]
    fn test_adjacent_to_ends() {
        assert_eq!(edge_score(2, 7), 50.0);
        assert_eq!(edge_score(6, 7), 50.0);
    }

    #[test]
    fn test_middle_positions() {
        assert_eq!(edge_score(3, 7), 0.0);
        assert_eq!(edge_score(4, 7), 0.0);
    }

    #[test]
    fn test_degenerate_small_rows() {
        // Two stations: both are ends, even though 2 is also "adjacent".
        assert_eq!(edge_score(1, 2), 100.0);
        assert_eq!(edge_score(2, 2), 100.0);
        // Three stations: only the center is merely adjacent.
        assert_eq!(edge_score(1, 3), 100.0);
        assert_eq!(edge_score(2, 3), 50.0);
        assert_eq!(edge_score(3, 3), 100.0);
    }
}
