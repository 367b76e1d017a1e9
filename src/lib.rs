//! Deterministic station-selection engine for linear rows.
//!
//! Given a row of discrete stations, the set of already-occupied
//! positions, and whether privacy dividers are installed, the crate scores
//! every free station and recommends the best one. Four weighted
//! sub-scores feed the composite:
//!
//! - **Proximity**: distance to the nearest occupant, mitigated by
//!   dividers.
//! - **Edge**: preference for end-of-row positions.
//! - **Collective welfare**: a three-part lookahead (next-user viability,
//!   two-user lookahead, symmetry preservation) measuring what a choice
//!   leaves behind for future arrivals.
//! - **Buffer**: compliance with the minimum-gap protocol of one free
//!   station between occupants.
//!
//! The selection policy prefers buffer-compliant, socially responsible
//! stations, excludes antisocial options when better alternatives exist,
//! and degrades gracefully to a least-bad recommendation when every
//! station violates the protocol.
//!
//! # Architecture
//!
//! The engine is a pure function of its inputs: no I/O, no shared state,
//! no randomness, worst case O(n²) in the station count.
//! [`layout::Layout`] is the validated configuration boundary; everything
//! downstream of it is infallible. Presentation concerns — rendering,
//! animation, artificial delays — belong to consumers, which receive a
//! fully diagnosable [`select::Recommendation`].
//!
//! # Examples
//!
//! ```
//! use urinal_protocol::layout::Layout;
//! use urinal_protocol::select::{recommend, Status};
//!
//! let layout = Layout::new(5, vec![1], false).unwrap();
//! let result = recommend(&layout);
//!
//! // The far end wins; the stranding middle option is excluded.
//! assert_eq!(result.recommendation, Some(5));
//! assert_eq!(result.status, Status::SociallyAware);
//! assert_eq!(result.excluded_options[0].position, 4);
//! ```
//!
//! # References
//!
//! - Middlemist, Knowles & Matter (1976), proximity stress in lavatory
//!   settings
//! - Kranakis & Krizanc (2010), *The Urinal Problem*
//! - Hall (1966), *The Hidden Dimension* (proxemics)

pub mod describe;
pub mod layout;
pub mod score;
pub mod select;
#[cfg(feature = "wasm")]
pub mod wasm;
