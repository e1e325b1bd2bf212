//! Scoring engine for the soilfit career-fit assessment.
//!
//! [`AssessmentScorer`] turns a completed set of [`AnswerRecord`]s into a
//! [`ScoreReport`] in three steps:
//! - **Points**: every answer becomes a raw point value on a `1..=scale`
//!   scale. Numbers pass through untouched, boolean answers score the top or
//!   bottom of the scale, and multiple-choice answers are resolved through the
//!   [`ScoringRules`] table.
//! - **Sub-scores**: answers are pooled by subcategory group (see [`groups`])
//!   and averaged into a percentage. Groups without answers score `0`.
//! - **Composites**: psychometric, technical, prerequisite and overall scores
//!   are derived from the already-rounded sub-scores.
//!
//! Every rounding step rounds half up, and each score is rounded where it is
//! first produced. Scoring is total: no input shape raises an error.
//!
//! # Examples
//!
//! ```
//! use soilfit_core::{AnswerRecord, Category};
//! use soilfit_scorer::compute;
//!
//! let answers = [
//!     AnswerRecord::new("interest_1", 4_u8, Category::Psychometric, "interest"),
//!     AnswerRecord::new("interest_2", 6_u8, Category::Psychometric, "interest"),
//! ];
//! let report = compute(&answers);
//! assert_eq!(report.interest_score, 71);
//! assert_eq!(report.wiscar_scores.interest, 71);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::LazyLock;

use log::{debug, warn};
use soilfit_core::{AnswerRecord, AnswerValue, Calculator, ScoreReport, WiscarScores};

mod error;
pub mod groups;
mod rules;

pub use error::ScoringConfigError;
pub use rules::{
    CORRECT_POINTS, ChoiceRule, INCORRECT_POINTS, MAX_POINTS, MIN_POINTS, NEUTRAL_POINTS,
    ScoringRules,
};

/// Width of the rating scale used by the built-in question bank.
pub const DEFAULT_SCALE: u8 = 7;

const PSYCHOMETRIC_WEIGHT: f64 = 0.4;
const TECHNICAL_WEIGHT: f64 = 0.35;
const WISCAR_WEIGHT: f64 = 0.25;

static DEFAULT_SCORER: LazyLock<AssessmentScorer> = LazyLock::new(AssessmentScorer::default);

/// Score answers with the built-in rules and the default 7-point scale.
#[must_use]
pub fn compute(answers: &[AnswerRecord]) -> ScoreReport {
    DEFAULT_SCORER.compute(answers)
}

/// Calculator for the soil and water auditor career-fit assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentScorer {
    rules: ScoringRules,
    scale: u8,
}

impl AssessmentScorer {
    /// Build a scorer over `rules` with the default 7-point scale.
    #[must_use]
    pub const fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            scale: DEFAULT_SCALE,
        }
    }

    /// Replace the rating scale.
    ///
    /// Boolean `true` answers score the full scale; numeric answers are
    /// expected to lie in `1..=scale`.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::ZeroScale`] when `scale` is zero.
    pub fn with_scale(mut self, scale: u8) -> Result<Self, ScoringConfigError> {
        if scale == 0 {
            return Err(ScoringConfigError::ZeroScale);
        }
        self.scale = scale;
        Ok(self)
    }

    /// Rules used to resolve multiple-choice answers.
    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Width of the rating scale.
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Score a multiple-choice answer; see [`ScoringRules::resolve_choice`].
    #[must_use]
    pub fn resolve_choice_score(&self, question_id: &str, answer: &str) -> u8 {
        self.rules.resolve_choice(question_id, answer)
    }

    /// Average the answers in `subcategories` into a percentage.
    ///
    /// All matching answers are pooled into one average. Returns `0` when no
    /// answer matches.
    ///
    /// # Examples
    /// ```
    /// use soilfit_core::{AnswerRecord, Category};
    /// use soilfit_scorer::{AssessmentScorer, groups};
    ///
    /// let scorer = AssessmentScorer::default();
    /// let answers = [AnswerRecord::new("will_1", false, Category::Wiscar, "will")];
    /// assert_eq!(scorer.average_for(&answers, groups::WILL), 14);
    /// assert_eq!(scorer.average_for(&answers, groups::SKILL), 0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "sub-scores are percentages of a floating-point mean"
    )]
    pub fn average_for(&self, answers: &[AnswerRecord], subcategories: &[&str]) -> i32 {
        let (total, count) = answers
            .iter()
            .filter(|record| subcategories.contains(&record.subcategory.as_str()))
            .fold((0.0_f64, 0_usize), |(total, count), record| {
                (total + self.points_for(record), count + 1)
            });
        if count == 0 {
            return 0;
        }
        let average = total / count as f64;
        round_half_up(average / f64::from(self.scale) * 100.0)
    }

    fn points_for(&self, record: &AnswerRecord) -> f64 {
        match &record.value {
            AnswerValue::Number(points) => {
                if !(1.0..=f64::from(self.scale)).contains(points) {
                    warn!(
                        "answer to {} is {points}, outside 1..={}; scoring it unchanged",
                        record.question_id, self.scale
                    );
                }
                *points
            }
            AnswerValue::Boolean(true) => f64::from(self.scale),
            AnswerValue::Boolean(false) => 1.0,
            AnswerValue::Choice(text) => {
                if self.rules.rule(&record.question_id).is_none() {
                    debug!(
                        "no scoring rule for {}; using neutral points",
                        record.question_id
                    );
                }
                f64::from(self.resolve_choice_score(&record.question_id, text))
            }
        }
    }
}

impl Default for AssessmentScorer {
    fn default() -> Self {
        Self::new(ScoringRules::default())
    }
}

impl Calculator for AssessmentScorer {
    fn compute(&self, answers: &[AnswerRecord]) -> ScoreReport {
        let interest_score = self.average_for(answers, groups::INTEREST);
        let motivation_score = self.average_for(answers, groups::MOTIVATION);
        let personality_score = self.average_for(answers, groups::PERSONALITY);
        let aptitude_score = self.average_for(answers, groups::APTITUDE);
        let domain_score = self.average_for(answers, groups::DOMAIN);

        let wiscar_scores = WiscarScores {
            will: self.average_for(answers, groups::WILL),
            interest: interest_score,
            skill: self.average_for(answers, groups::SKILL),
            cognitive: self.average_for(answers, groups::COGNITIVE),
            ability: self.average_for(answers, groups::ABILITY),
            reality: self.average_for(answers, groups::REALITY),
        };

        let psychometric_score =
            rounded_mean(&[interest_score, personality_score, motivation_score]);
        let technical_score = rounded_mean(&[aptitude_score, domain_score]);
        let prerequisite_score = rounded_mean(&[aptitude_score, wiscar_scores.skill]);
        let overall_score = overall(psychometric_score, technical_score, &wiscar_scores);

        debug!(
            "scored {} answers: overall {overall_score}, psychometric {psychometric_score}, \
             technical {technical_score}",
            answers.len()
        );

        ScoreReport {
            overall_score,
            psychometric_score,
            technical_score,
            interest_score,
            personality_score,
            motivation_score,
            aptitude_score,
            domain_score,
            prerequisite_score,
            wiscar_scores,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the overall score is a weighted blend of integer percentages"
)]
fn overall(psychometric: i32, technical: i32, wiscar: &WiscarScores) -> i32 {
    let wiscar_total: f64 = wiscar.values().into_iter().map(f64::from).sum();
    let wiscar_mean = wiscar_total / 6.0;
    round_half_up(
        f64::from(psychometric) * PSYCHOMETRIC_WEIGHT
            + f64::from(technical) * TECHNICAL_WEIGHT
            + wiscar_mean * WISCAR_WEIGHT,
    )
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "composite scores take the mean of integer percentages"
)]
fn rounded_mean(scores: &[i32]) -> i32 {
    if scores.is_empty() {
        return 0;
    }
    let total: f64 = scores.iter().copied().map(f64::from).sum();
    round_half_up(total / scores.len() as f64)
}

/// Round to the nearest integer, sending halves towards positive infinity.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "rounding converts a bounded percentage back to an integer"
)]
pub(crate) fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i32
}
