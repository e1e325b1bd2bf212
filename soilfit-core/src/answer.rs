//! Answer records collected from the questionnaire.
//!
//! An [`AnswerRecord`] pairs a question identifier with the value the user
//! picked and the category/subcategory tags copied from the question catalogue.
//! Subcategories are open-ended strings: calculators group by them and ignore
//! tags they do not know.
//!
//! # Examples
//! ```
//! use soilfit_core::{AnswerRecord, AnswerValue, Category};
//!
//! let record = AnswerRecord::new("will_1", true, Category::Wiscar, "will");
//! assert_eq!(record.value, AnswerValue::Boolean(true));
//! assert!(record.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const TRUE_TOKEN: &str = "true";
const FALSE_TOKEN: &str = "false";

/// Questionnaire section an answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Interest, personality and motivation questions.
    Psychometric,
    /// Aptitude and domain knowledge questions.
    Technical,
    /// Will, skill, cognitive, ability and reality questions.
    Wiscar,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use soilfit_core::Category;
    ///
    /// assert_eq!(Category::Wiscar.as_str(), "wiscar");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Category`] name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category '{value}'")]
pub struct CategoryParseError {
    value: String,
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Self::Psychometric),
            "technical" => Ok(Self::Technical),
            "wiscar" => Ok(Self::Wiscar),
            _ => Err(CategoryParseError {
                value: s.to_owned(),
            }),
        }
    }
}

/// The value a user gave for one question.
///
/// On the wire a value is a JSON number, a JSON boolean, or a string. The
/// strings `"true"` and `"false"` are boolean tokens; any other string is a
/// multiple-choice option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "wire::RawAnswer", into = "wire::RawAnswer")
)]
pub enum AnswerValue {
    /// A point on a numeric scale, normally `1..=7`.
    Number(f64),
    /// A yes/no answer.
    Boolean(bool),
    /// The text of the selected multiple-choice option.
    Choice(String),
}

impl AnswerValue {
    /// Interpret free text, mapping the boolean tokens to [`AnswerValue::Boolean`].
    ///
    /// # Examples
    /// ```
    /// use soilfit_core::AnswerValue;
    ///
    /// assert_eq!(AnswerValue::from_text("false"), AnswerValue::Boolean(false));
    /// assert_eq!(
    ///     AnswerValue::from_text("10 mg/L"),
    ///     AnswerValue::Choice("10 mg/L".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let owned = text.into();
        match owned.as_str() {
            TRUE_TOKEN => Self::Boolean(true),
            FALSE_TOKEN => Self::Boolean(false),
            _ => Self::Choice(owned),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::from_text(value)
    }
}

/// One user response to one question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AnswerRecord {
    /// Identifier of the answered question, unique within a submission.
    pub question_id: String,
    /// The answer itself.
    #[cfg_attr(feature = "serde", serde(rename = "answer"))]
    pub value: AnswerValue,
    /// Questionnaire section of the question.
    pub category: Category,
    /// Fine-grained tag used to group answers into sub-scores.
    pub subcategory: String,
}

/// Errors returned by [`AnswerRecord::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnswerRecordError {
    /// The question identifier was empty or whitespace.
    #[error("answer record must carry a question id")]
    EmptyQuestionId,
    /// The subcategory tag was empty or whitespace.
    #[error("answer to {question_id} must carry a subcategory")]
    EmptySubcategory {
        /// Question whose record is missing the tag.
        question_id: String,
    },
    /// A numeric answer was NaN or infinite.
    #[error("answer to {question_id} is not a finite number")]
    NonFiniteNumber {
        /// Question whose answer is not finite.
        question_id: String,
    },
}

impl AnswerRecord {
    /// Construct a record without validating it.
    ///
    /// Calculators accept any record; call [`AnswerRecord::validate`] at the
    /// boundary when strict input is required.
    #[must_use]
    pub fn new(
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
        category: Category,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            category,
            subcategory: subcategory.into(),
        }
    }

    /// Check the record is well formed.
    ///
    /// # Errors
    /// Returns [`AnswerRecordError`] when the question id or subcategory is
    /// blank, or when a numeric answer is not finite.
    pub fn validate(&self) -> Result<(), AnswerRecordError> {
        if self.question_id.trim().is_empty() {
            return Err(AnswerRecordError::EmptyQuestionId);
        }
        if self.subcategory.trim().is_empty() {
            return Err(AnswerRecordError::EmptySubcategory {
                question_id: self.question_id.clone(),
            });
        }
        if let AnswerValue::Number(points) = self.value
            && !points.is_finite()
        {
            return Err(AnswerRecordError::NonFiniteNumber {
                question_id: self.question_id.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Serialize};

    use super::{AnswerValue, FALSE_TOKEN, TRUE_TOKEN};

    /// JSON shape of an answer value.
    #[derive(Clone, Serialize, Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawAnswer {
        Number(f64),
        Flag(bool),
        Text(String),
    }

    impl From<RawAnswer> for AnswerValue {
        fn from(raw: RawAnswer) -> Self {
            match raw {
                RawAnswer::Number(points) => Self::Number(points),
                RawAnswer::Flag(flag) => Self::Boolean(flag),
                RawAnswer::Text(text) => Self::from_text(text),
            }
        }
    }

    impl From<AnswerValue> for RawAnswer {
        fn from(value: AnswerValue) -> Self {
            match value {
                AnswerValue::Number(points) => Self::Number(points),
                AnswerValue::Boolean(true) => Self::Text(TRUE_TOKEN.to_owned()),
                AnswerValue::Boolean(false) => Self::Text(FALSE_TOKEN.to_owned()),
                AnswerValue::Choice(text) => Self::Text(text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("psychometric", Category::Psychometric)]
    #[case("TECHNICAL", Category::Technical)]
    #[case("Wiscar", Category::Wiscar)]
    fn category_parses_case_insensitively(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(input), Ok(expected));
    }

    #[rstest]
    fn category_rejects_unknown() {
        let result = Category::from_str("aptitude");
        assert_eq!(
            result.map_err(|err| err.to_string()),
            Err("unknown category 'aptitude'".to_owned())
        );
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Category::Technical.to_string(), Category::Technical.as_str());
    }

    #[rstest]
    #[case("true", AnswerValue::Boolean(true))]
    #[case("false", AnswerValue::Boolean(false))]
    #[case("True", AnswerValue::Choice("True".into()))]
    #[case("Recommend", AnswerValue::Choice("Recommend".into()))]
    fn text_maps_boolean_tokens(#[case] text: &str, #[case] expected: AnswerValue) {
        assert_eq!(AnswerValue::from_text(text), expected);
    }

    #[rstest]
    fn validate_rejects_blank_question_id() {
        let record = AnswerRecord::new("  ", 4_u8, Category::Psychometric, "interest");
        assert_eq!(record.validate(), Err(AnswerRecordError::EmptyQuestionId));
    }

    #[rstest]
    fn validate_rejects_blank_subcategory() {
        let record = AnswerRecord::new("interest_1", 4_u8, Category::Psychometric, "");
        assert!(matches!(
            record.validate(),
            Err(AnswerRecordError::EmptySubcategory { question_id }) if question_id == "interest_1"
        ));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn validate_rejects_non_finite_numbers(#[case] points: f64) {
        let record = AnswerRecord::new("interest_1", points, Category::Psychometric, "interest");
        assert!(matches!(
            record.validate(),
            Err(AnswerRecordError::NonFiniteNumber { .. })
        ));
    }

    #[rstest]
    fn validate_accepts_out_of_scale_numbers() {
        let record = AnswerRecord::new("interest_1", 12_u8, Category::Psychometric, "interest");
        assert!(record.validate().is_ok());
    }
}
