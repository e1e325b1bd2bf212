//! Score reports returned by a [`Calculator`](crate::Calculator).
//!
//! Every score is an integer percentage. Well-formed answers keep each value
//! inside `0..=100`; out-of-scale numeric answers are propagated rather than
//! clamped, so the fields are signed.

use crate::FitBand;

/// The six WISCAR dimensions: Will, Interest, Skill, Cognitive readiness,
/// Ability to learn and Reality of job fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WiscarScores {
    /// Commitment and consistency of interest.
    pub will: i32,
    /// Interest in the field; always equal to [`ScoreReport::interest_score`].
    pub interest: i32,
    /// Current skill level.
    pub skill: i32,
    /// Cognitive readiness.
    pub cognitive: i32,
    /// Ability to learn.
    pub ability: i32,
    /// Reality of job fit.
    pub reality: i32,
}

impl WiscarScores {
    /// Dimension names in reporting order.
    pub const DIMENSIONS: [&'static str; 6] =
        ["will", "interest", "skill", "cognitive", "ability", "reality"];

    /// Return the six values in reporting order.
    ///
    /// # Examples
    /// ```
    /// use soilfit_core::WiscarScores;
    ///
    /// let scores = WiscarScores { will: 100, ..WiscarScores::default() };
    /// assert_eq!(scores.values(), [100, 0, 0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub const fn values(&self) -> [i32; 6] {
        [
            self.will,
            self.interest,
            self.skill,
            self.cognitive,
            self.ability,
            self.reality,
        ]
    }

    /// Pair each dimension name with its value.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, i32); 6] {
        let values = self.values();
        let mut entries = [("", 0_i32); 6];
        for ((slot, name), value) in entries.iter_mut().zip(Self::DIMENSIONS).zip(values) {
            *slot = (name, value);
        }
        entries
    }
}

/// Result of scoring one completed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreReport {
    /// Weighted blend of the psychometric, technical and WISCAR scores.
    pub overall_score: i32,
    /// Mean of interest, personality and motivation.
    pub psychometric_score: i32,
    /// Mean of aptitude and domain knowledge.
    pub technical_score: i32,
    /// Interest sub-score.
    pub interest_score: i32,
    /// Pooled cognitive style, stress management and work preference answers.
    pub personality_score: i32,
    /// Motivation sub-score.
    pub motivation_score: i32,
    /// Pooled numerical and logical answers.
    pub aptitude_score: i32,
    /// Pooled soil, water, assessment, regulation and conservation answers.
    pub domain_score: i32,
    /// Mean of aptitude and WISCAR skill.
    pub prerequisite_score: i32,
    /// WISCAR framework breakdown.
    pub wiscar_scores: WiscarScores,
}

impl ScoreReport {
    /// Recommendation tier for the overall score.
    ///
    /// # Examples
    /// ```
    /// use soilfit_core::{FitBand, ScoreReport};
    ///
    /// let report = ScoreReport { overall_score: 64, ..ScoreReport::default() };
    /// assert_eq!(report.recommendation(), FitBand::PotentiallySuitable);
    /// ```
    #[must_use]
    pub const fn recommendation(&self) -> FitBand {
        FitBand::for_score(self.overall_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_dimension_order() {
        let scores = WiscarScores {
            will: 1,
            interest: 2,
            skill: 3,
            cognitive: 4,
            ability: 5,
            reality: 6,
        };
        let entries = scores.entries();
        assert_eq!(entries.first(), Some(&("will", 1)));
        assert_eq!(entries.last(), Some(&("reality", 6)));
        assert_eq!(scores.values(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn default_report_is_all_zero() {
        let report = ScoreReport::default();
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.wiscar_scores.values(), [0; 6]);
        assert_eq!(report.recommendation(), FitBand::ConsiderAlternatives);
    }
}
