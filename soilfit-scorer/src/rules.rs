//! Declarative per-question rules for multiple-choice answers.
//!
//! Each modelled question maps to one [`ChoiceRule`]: either a correctness
//! rule with a single right answer, or a preference table scoring every option
//! on the 1–7 scale. Questions without a rule score the neutral
//! [`NEUTRAL_POINTS`].

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::io::{BufReader, Read};

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use soilfit_fs::open_utf8_file;

use crate::ScoringConfigError;

/// Points for the correct answer to a knowledge question.
pub const CORRECT_POINTS: u8 = 7;
/// Points for a wrong answer to a knowledge question.
pub const INCORRECT_POINTS: u8 = 2;
/// Points for any option no rule recognises.
pub const NEUTRAL_POINTS: u8 = 4;
/// Smallest point value a preference table may assign.
pub const MIN_POINTS: u8 = 1;
/// Largest point value a preference table may assign.
pub const MAX_POINTS: u8 = 7;

/// How one multiple-choice question is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceRule {
    /// Knowledge question with a single correct option.
    Correct {
        /// Exact text of the correct option.
        answer: String,
    },
    /// Subjective question scoring each option by how well it fits the role.
    Preference {
        /// Points keyed by exact option text.
        scores: BTreeMap<String, u8>,
    },
}

impl ChoiceRule {
    /// Build a correctness rule.
    #[must_use]
    pub fn correct(answer: impl Into<String>) -> Self {
        Self::Correct {
            answer: answer.into(),
        }
    }

    /// Build a preference rule from `(option, points)` pairs.
    #[must_use]
    pub fn preference<'a>(options: impl IntoIterator<Item = (&'a str, u8)>) -> Self {
        Self::Preference {
            scores: options
                .into_iter()
                .map(|(option, points)| (option.to_owned(), points))
                .collect(),
        }
    }

    /// Score an answer under this rule.
    ///
    /// # Examples
    /// ```
    /// use soilfit_scorer::ChoiceRule;
    ///
    /// let rule = ChoiceRule::correct("26");
    /// assert_eq!(rule.points("26"), 7);
    /// assert_eq!(rule.points("25"), 2);
    /// ```
    #[must_use]
    pub fn points(&self, answer: &str) -> u8 {
        match self {
            Self::Correct { answer: correct } if correct == answer => CORRECT_POINTS,
            Self::Correct { .. } => INCORRECT_POINTS,
            Self::Preference { scores } => scores.get(answer).copied().unwrap_or(NEUTRAL_POINTS),
        }
    }

    fn validate(&self, question_id: &str) -> Result<(), ScoringConfigError> {
        match self {
            Self::Correct { answer } if answer.trim().is_empty() => {
                Err(ScoringConfigError::EmptyCorrectAnswer {
                    question_id: question_id.to_owned(),
                })
            }
            Self::Correct { .. } => Ok(()),
            Self::Preference { scores } if scores.is_empty() => {
                Err(ScoringConfigError::EmptyPreferenceTable {
                    question_id: question_id.to_owned(),
                })
            }
            Self::Preference { scores } => scores
                .iter()
                .find(|(_, points)| !(MIN_POINTS..=MAX_POINTS).contains(*points))
                .map_or(Ok(()), |(option, points)| {
                    Err(ScoringConfigError::PreferenceOutOfRange {
                        question_id: question_id.to_owned(),
                        option: option.clone(),
                        points: *points,
                    })
                }),
        }
    }
}

/// Read-only rule table keyed by question id.
///
/// [`ScoringRules::default`] carries the built-in soil and water auditor
/// question bank. [`ScoringRules::new`] starts empty so callers can describe
/// their own questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringRules {
    rules: BTreeMap<String, ChoiceRule>,
}

impl ScoringRules {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Insert or replace the rule for a question.
    pub fn insert(&mut self, question_id: impl Into<String>, rule: ChoiceRule) -> Option<ChoiceRule> {
        self.rules.insert(question_id.into(), rule)
    }

    /// Add a rule while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_rule(mut self, question_id: impl Into<String>, rule: ChoiceRule) -> Self {
        self.insert(question_id, rule);
        self
    }

    /// Return the rule for a question, if modelled.
    #[must_use]
    pub fn rule(&self, question_id: &str) -> Option<&ChoiceRule> {
        self.rules.get(question_id)
    }

    /// Number of modelled questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Report whether no question is modelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Score a multiple-choice answer.
    ///
    /// Correctness rules award [`CORRECT_POINTS`] or [`INCORRECT_POINTS`];
    /// preference rules look the option up and fall back to
    /// [`NEUTRAL_POINTS`]; unmodelled questions score [`NEUTRAL_POINTS`].
    ///
    /// # Examples
    /// ```
    /// use soilfit_scorer::ScoringRules;
    ///
    /// let rules = ScoringRules::default();
    /// assert_eq!(rules.resolve_choice("domain_1", "Moisture levels"), 2);
    /// assert_eq!(rules.resolve_choice("personality_3", "I seek help or guidance when needed"), 4);
    /// assert_eq!(rules.resolve_choice("unmodelled_9", "Anything"), 4);
    /// ```
    #[must_use]
    pub fn resolve_choice(&self, question_id: &str, answer: &str) -> u8 {
        self.rule(question_id)
            .map_or(NEUTRAL_POINTS, |rule| rule.points(answer))
    }

    /// Check every rule is usable.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] for a blank question id, a blank correct
    /// answer, an empty preference table, or a preference outside
    /// `MIN_POINTS..=MAX_POINTS`.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for (question_id, rule) in &self.rules {
            if question_id.trim().is_empty() {
                return Err(ScoringConfigError::BlankQuestionId);
            }
            rule.validate(question_id)?;
        }
        Ok(())
    }

    /// Parse and validate a JSON rule table.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::Parse`] for malformed JSON and the
    /// [`ScoringRules::validate`] errors for unusable rules.
    pub fn from_reader(reader: impl Read) -> Result<Self, ScoringConfigError> {
        let rules: Self = serde_json::from_reader(BufReader::new(reader))
            .map_err(|source| ScoringConfigError::Parse { source })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load and validate a JSON rule table from disk.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::OpenFile`] when the file cannot be
    /// opened, [`ScoringConfigError::ParseFile`] for malformed JSON, and the
    /// [`ScoringRules::validate`] errors for unusable rules.
    pub fn load(path: &Utf8Path) -> Result<Self, ScoringConfigError> {
        let file = open_utf8_file(path).map_err(|source| ScoringConfigError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file).map_err(|err| match err {
            ScoringConfigError::Parse { source } => ScoringConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new()
            .with_rule("aptitude_1", ChoiceRule::correct("7.0"))
            .with_rule("aptitude_2", ChoiceRule::correct("26"))
            .with_rule("aptitude_3", ChoiceRule::correct("Recommend"))
            .with_rule("aptitude_4", ChoiceRule::correct("40%"))
            .with_rule("domain_1", ChoiceRule::correct("Acidity or alkalinity levels"))
            .with_rule("domain_2", ChoiceRule::correct("Dissolved oxygen levels"))
            .with_rule(
                "domain_3",
                ChoiceRule::correct("Universal Soil Loss Equation (USLE)"),
            )
            .with_rule("domain_4", ChoiceRule::correct("10 mg/L"))
            .with_rule("domain_5", ChoiceRule::correct("Buffer strips along waterways"))
            .with_rule(
                "motivation_1",
                ChoiceRule::preference([
                    ("Passion for protecting the environment", 7),
                    ("Opportunity to make a measurable impact", 6),
                    ("Combination of outdoor and analytical work", 6),
                    ("Interest in scientific analysis and data", 5),
                    ("Career stability and growth prospects", 4),
                ]),
            )
            .with_rule(
                "personality_1",
                ChoiceRule::preference([
                    ("Strongly prefer logical, systematic approaches", 7),
                    ("Prefer logical approaches with some creativity", 6),
                    ("Balanced approach using both methods", 5),
                    ("Prefer creative approaches with some structure", 4),
                    ("Strongly prefer creative, innovative approaches", 3),
                ]),
            )
            .with_rule(
                "personality_3",
                ChoiceRule::preference([
                    ("I work methodically and stick to established procedures", 7),
                    ("I prioritize tasks and focus on the most critical items", 6),
                    ("I work best under pressure and become more focused", 5),
                    ("I seek help or guidance when needed", 4),
                    ("I tend to feel overwhelmed and may make mistakes", 2),
                ]),
            )
            .with_rule(
                "personality_4",
                ChoiceRule::preference([
                    ("Enjoy both equally depending on the task", 7),
                    ("Prefer independent work with occasional collaboration", 6),
                    ("Prefer team work with some independent tasks", 5),
                    ("Strongly prefer working independently", 4),
                    ("Strongly prefer collaborative team environments", 4),
                ]),
            )
    }
}
