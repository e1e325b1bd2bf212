//! Collect answers as a user moves through the questionnaire.
//!
//! Users may revisit a question and change their answer. [`ResponseSet`]
//! keeps one record per question id: a later answer replaces the earlier one
//! in place, so the set keeps the order in which questions were first
//! answered.

use crate::{AnswerRecord, AnswerRecordError, AnswerValue};

/// De-duplicated answers for one assessment session.
///
/// # Examples
/// ```
/// use soilfit_core::{AnswerRecord, AnswerValue, Category, ResponseSet};
///
/// let mut responses = ResponseSet::new();
/// responses.record(AnswerRecord::new("interest_1", 3_u8, Category::Psychometric, "interest"));
/// responses.record(AnswerRecord::new("interest_1", 6_u8, Category::Psychometric, "interest"));
///
/// assert_eq!(responses.len(), 1);
/// assert_eq!(responses.answer_for("interest_1"), Some(&AnswerValue::Number(6.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseSet {
    records: Vec<AnswerRecord>,
}

impl ResponseSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Store an answer, replacing any earlier answer to the same question.
    ///
    /// Returns the replaced record, if there was one.
    pub fn record(&mut self, record: AnswerRecord) -> Option<AnswerRecord> {
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|existing| existing.question_id == record.question_id)
        {
            Some(std::mem::replace(existing, record))
        } else {
            self.records.push(record);
            None
        }
    }

    /// Return the full record for a question, if answered.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&AnswerRecord> {
        self.records
            .iter()
            .find(|record| record.question_id == question_id)
    }

    /// Return the current answer for a question, if answered.
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&AnswerValue> {
        self.get(question_id).map(|record| &record.value)
    }

    /// Number of answered questions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether no question has been answered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the answers in first-answered order.
    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Consume the set and return the answers.
    #[must_use]
    pub fn into_records(self) -> Vec<AnswerRecord> {
        self.records
    }

    /// Forget every answer, for example when the user restarts.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Check every stored record with [`AnswerRecord::validate`].
    ///
    /// # Errors
    /// Returns the first [`AnswerRecordError`] found.
    pub fn validate(&self) -> Result<(), AnswerRecordError> {
        self.records.iter().try_for_each(AnswerRecord::validate)
    }
}

impl Extend<AnswerRecord> for ResponseSet {
    fn extend<I: IntoIterator<Item = AnswerRecord>>(&mut self, iter: I) {
        for record in iter {
            self.record(record);
        }
    }
}

impl FromIterator<AnswerRecord> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = AnswerRecord>>(iter: I) -> Self {
        let mut responses = Self::new();
        responses.extend(iter);
        responses
    }
}

impl AsRef<[AnswerRecord]> for ResponseSet {
    fn as_ref(&self) -> &[AnswerRecord] {
        self.records()
    }
}
