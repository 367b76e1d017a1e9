//! Row configuration and validation.
//!
//! [`Layout`] is the single fallible boundary of the crate: once a layout
//! has been constructed, every downstream computation is infallible. The
//! constructor rejects invalid input rather than sanitizing it, so callers
//! that shrink a row must filter their occupied list before rebuilding.

use thiserror::Error;

/// Reasons a layout cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The row must contain at least one station.
    #[error("a layout needs at least one station")]
    NoStations,

    /// An occupied position falls outside the row.
    #[error("occupied position {position} is outside the row 1..={station_count}")]
    OutOfRange {
        /// The offending position.
        position: u32,
        /// The row size it was checked against.
        station_count: u32,
    },

    /// The same position was listed as occupied more than once.
    #[error("occupied position {0} appears more than once")]
    Duplicate(u32),
}

/// A validated row configuration.
///
/// Stations are numbered `1..=station_count`, left to right. The occupied
/// list is stored sorted ascending so downstream iteration order is
/// canonical regardless of the order the caller supplied.
///
/// # Examples
///
/// ```
/// use urinal_protocol::layout::Layout;
///
/// let layout = Layout::new(5, vec![3, 1], false).unwrap();
/// assert_eq!(layout.occupied(), &[1, 3]);
/// assert_eq!(layout.free_positions(), vec![2, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Layout {
    station_count: u32,
    occupied: Vec<u32>,
    dividers: bool,
}

impl Layout {
    /// Builds a layout, rejecting out-of-range or duplicate positions.
    ///
    /// The occupied list may arrive in any order.
    pub fn new(
        station_count: u32,
        occupied: impl Into<Vec<u32>>,
        dividers: bool,
    ) -> Result<Self, LayoutError> {
        if station_count == 0 {
            return Err(LayoutError::NoStations);
        }

        let mut occupied = occupied.into();
        occupied.sort_unstable();

        for pair in occupied.windows(2) {
            if pair[0] == pair[1] {
                return Err(LayoutError::Duplicate(pair[0]));
            }
        }
        for &position in &occupied {
            if position == 0 || position > station_count {
                return Err(LayoutError::OutOfRange {
                    position,
                    station_count,
                });
            }
        }

        Ok(Self {
            station_count,
            occupied,
            dividers,
        })
    }

    /// Number of stations in the row.
    pub fn station_count(&self) -> u32 {
        self.station_count
    }

    /// Occupied positions, sorted ascending.
    pub fn occupied(&self) -> &[u32] {
        &self.occupied
    }

    /// Whether privacy dividers are installed between stations.
    pub fn dividers(&self) -> bool {
        self.dividers
    }

    /// Free positions in ascending order.
    pub fn free_positions(&self) -> Vec<u32> {
        (1..=self.station_count)
            .filter(|p| !self.occupied.contains(p))
            .collect()
    }

    /// Whether every station is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied.len() as u32 == self.station_count
    }

    /// Whether this is the Middlemist, Knowles & Matter (1976) field-study
    /// geometry: a three-station row with only the center occupied.
    pub fn is_middlemist(&self) -> bool {
        self.station_count == 3 && self.occupied == [2]
    }

    /// Whether the occupants form an adversarial seeding pattern:
    /// a strict alternating sequence (every sorted pair of neighbours
    /// exactly two apart) filling at least 40% of a row of four or more.
    pub fn is_adversarial(&self) -> bool {
        if self.occupied.len() < 2 || self.station_count < 4 {
            return false;
        }
        let alternating = self.occupied.windows(2).all(|pair| pair[1] - pair[0] == 2);
        let occupancy = self.occupied.len() as f64 / self.station_count as f64;
        alternating && occupancy >= 0.4
    }
}
