//! Error types raised while configuring the assessment scorer.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading scoring rules or configuring the scorer.
///
/// Scoring itself never fails; these errors surface only at configuration
/// time.
#[derive(Debug, Error)]
pub enum ScoringConfigError {
    /// The rating scale was zero.
    #[error("rating scale must be at least 1")]
    ZeroScale,
    /// A rule was keyed by an empty question id.
    #[error("scoring rule must name a question id")]
    BlankQuestionId,
    /// A correctness rule had no correct answer.
    #[error("correct answer for {question_id} must not be empty")]
    EmptyCorrectAnswer {
        /// Question carrying the rule.
        question_id: String,
    },
    /// A preference rule listed no options.
    #[error("preference table for {question_id} must list at least one option")]
    EmptyPreferenceTable {
        /// Question carrying the rule.
        question_id: String,
    },
    /// A preference score fell outside the 1–7 scale.
    #[error("preference for {option:?} on {question_id} is {points}, expected 1 to 7")]
    PreferenceOutOfRange {
        /// Question carrying the rule.
        question_id: String,
        /// Option text with the invalid score.
        option: String,
        /// Score found in the table.
        points: u8,
    },
    /// Opening a rules file failed.
    #[error("failed to open scoring rules at {path}")]
    OpenFile {
        /// Requested rules path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A rules file did not contain a valid rule table.
    #[error("failed to parse scoring rules at {path}")]
    ParseFile {
        /// Requested rules path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A rules document did not contain a valid rule table.
    #[error("failed to parse scoring rules")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
