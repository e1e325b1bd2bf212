//! Core domain types for the soilfit career-fit assessment.
//!
//! These models describe the boundary of the scoring engine: the answers a
//! questionnaire front end collects, the report the engine hands back, and the
//! [`Calculator`] trait that ties the two together. Strict validation lives
//! here, on the collaborator side, so calculators can stay total.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod answer;
pub mod band;
pub mod calculator;
pub mod report;
pub mod responses;

pub use answer::{AnswerRecord, AnswerRecordError, AnswerValue, Category, CategoryParseError};
pub use band::FitBand;
pub use calculator::Calculator;
pub use report::{ScoreReport, WiscarScores};
pub use responses::ResponseSet;
