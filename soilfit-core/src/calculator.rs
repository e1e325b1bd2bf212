//! Turn a completed set of answers into a [`ScoreReport`].
//!
//! The `Calculator` trait is the seam between the questionnaire front end and
//! a scoring engine.

use crate::{AnswerRecord, ScoreReport};

/// Compute a score report from a set of answers.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one calculator can
/// serve concurrent sessions. The method is infallible: unknown questions and
/// subcategories contribute nothing, and sections without answers score `0`.
///
/// Implementations must:
/// - Produce the same report for the same answers in any order.
/// - Hold no state between calls.
///
/// # Examples
///
/// ```rust
/// use soilfit_core::{AnswerRecord, Calculator, ScoreReport};
///
/// struct ZeroCalculator;
///
/// impl Calculator for ZeroCalculator {
///     fn compute(&self, _answers: &[AnswerRecord]) -> ScoreReport {
///         ScoreReport::default()
///     }
/// }
///
/// let report = ZeroCalculator.compute(&[]);
/// assert_eq!(report.overall_score, 0);
/// ```
pub trait Calculator: Send + Sync {
    /// Score `answers`.
    fn compute(&self, answers: &[AnswerRecord]) -> ScoreReport;
}
