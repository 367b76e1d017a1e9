//! Human-readable descriptions and presentation tiers for composite scores.

/// Canonical description of a composite score, by descending band.
///
/// Bands are inclusive on their lower bound: 90, 70, 40.
pub fn score_description(score: u8) -> &'static str {
    if score >= 90 {
        "Optimal Selection — Maximum Privacy Protocol"
    } else if score >= 70 {
        "Acceptable — Within Standard Comfort Parameters"
    } else if score >= 40 {
        "Suboptimal — Elevated Social Stress Anticipated"
    } else {
        "Critical — Protocol Violation Imminent"
    }
}

/// Coarser two-boundary tier used by presentation layers for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub enum Tier {
    /// Composite 70 and above.
    Recommended,
    /// Composite 40 to 69.
    Acceptable,
    /// Composite below 40.
    Avoid,
}

impl Tier {
    /// Maps a composite score to its tier.
    pub fn for_score(score: u8) -> Self {
        if score >= 70 {
            Tier::Recommended
        } else if score >= 40 {
            Tier::Acceptable
        } else {
            Tier::Avoid
        }
    }

    /// Lowercase tier name, as presentation layers use for styling hooks.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Recommended => "recommended",
            Tier::Acceptable => "acceptable",
            Tier::Avoid => "avoid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_bands_inclusive_on_lower_bound() {
        assert!(score_description(100).starts_with("Optimal"));
        assert!(score_description(90).starts_with("Optimal"));
        assert!(score_description(89).starts_with("Acceptable"));
        assert!(score_description(70).starts_with("Acceptable"));
        assert!(score_description(69).starts_with("Suboptimal"));
        assert!(score_description(40).starts_with("Suboptimal"));
        assert!(score_description(39).starts_with("Critical"));
        assert!(score_description(0).starts_with("Critical"));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_score(100), Tier::Recommended);
        assert_eq!(Tier::for_score(70), Tier::Recommended);
        assert_eq!(Tier::for_score(69), Tier::Acceptable);
        assert_eq!(Tier::for_score(40), Tier::Acceptable);
        assert_eq!(Tier::for_score(39), Tier::Avoid);
        assert_eq!(Tier::for_score(0), Tier::Avoid);
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::Recommended.as_str(), "recommended");
        assert_eq!(Tier::Acceptable.as_str(), "acceptable");
        assert_eq!(Tier::Avoid.as_str(), "avoid");
    }
}
