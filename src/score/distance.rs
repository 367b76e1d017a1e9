//! Distance to the nearest occupant.

/// Minimum absolute distance from `position` to any occupied station.
///
/// Returns `None` when nothing is occupied.
pub fn min_distance(position: u32, occupied: &[u32]) -> Option<u32> {
    occupied.iter().map(|&occ| position.abs_diff(occ)).min()
}
