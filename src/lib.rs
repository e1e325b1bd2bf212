//! Facade crate for the soilfit career-fit assessment.
//!
//! This crate re-exports the answer and report types together with the default
//! scorer, so hosts can depend on a single crate.

#![forbid(unsafe_code)]

pub use soilfit_core::{
    AnswerRecord, AnswerRecordError, AnswerValue, Calculator, Category, CategoryParseError,
    FitBand, ResponseSet, ScoreReport, WiscarScores,
};

pub use soilfit_scorer::{AssessmentScorer, ChoiceRule, ScoringConfigError, ScoringRules, compute};
