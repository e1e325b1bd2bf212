//! Recommendation tiers derived from a percentage score.
//!
//! # Examples
//! ```
//! use soilfit_core::FitBand;
//!
//! assert_eq!(FitBand::for_score(75), FitBand::HighlyRecommended);
//! assert_eq!(FitBand::for_score(74).as_str(), "potentially_suitable");
//! ```

use std::fmt;

/// Lowest score classed as [`FitBand::HighlyRecommended`].
pub const HIGHLY_RECOMMENDED_THRESHOLD: i32 = 75;
/// Lowest score classed as [`FitBand::PotentiallySuitable`].
pub const POTENTIALLY_SUITABLE_THRESHOLD: i32 = 60;

/// How well a score fits the target career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FitBand {
    /// Below [`POTENTIALLY_SUITABLE_THRESHOLD`].
    ConsiderAlternatives,
    /// From [`POTENTIALLY_SUITABLE_THRESHOLD`] up to, but excluding,
    /// [`HIGHLY_RECOMMENDED_THRESHOLD`].
    PotentiallySuitable,
    /// At or above [`HIGHLY_RECOMMENDED_THRESHOLD`].
    HighlyRecommended,
}

impl FitBand {
    /// Classify a score.
    #[must_use]
    pub const fn for_score(score: i32) -> Self {
        if score >= HIGHLY_RECOMMENDED_THRESHOLD {
            Self::HighlyRecommended
        } else if score >= POTENTIALLY_SUITABLE_THRESHOLD {
            Self::PotentiallySuitable
        } else {
            Self::ConsiderAlternatives
        }
    }

    /// Return the band as a `snake_case` identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "highly_recommended",
            Self::PotentiallySuitable => "potentially_suitable",
            Self::ConsiderAlternatives => "consider_alternatives",
        }
    }

    /// Human-readable heading for the band.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::PotentiallySuitable => "Potentially Suitable",
            Self::ConsiderAlternatives => "Consider Alternatives",
        }
    }

    /// Advice shown to the user alongside [`FitBand::title`].
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HighlyRecommended => {
                "You show excellent potential for a career in Soil & Water Auditing. \
                 Your psychological profile, technical aptitude, and learning readiness \
                 align well with this field."
            }
            Self::PotentiallySuitable => {
                "You have good potential for this field with some areas for development. \
                 Focus on strengthening your weaker areas while building on your strengths."
            }
            Self::ConsiderAlternatives => {
                "Based on your current profile, you might want to explore related fields \
                 or focus on significant skill development before pursuing this career path."
            }
        }
    }
}

impl fmt::Display for FitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
