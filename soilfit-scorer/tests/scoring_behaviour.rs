//! Behavioural coverage for scoring completed assessments.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use soilfit_core::{AnswerRecord, Category, FitBand, ScoreReport};
use soilfit_scorer::compute;

/// Answers given so far and the report produced from them.
pub struct Assessment {
    answers: RefCell<Vec<AnswerRecord>>,
    report: RefCell<Option<ScoreReport>>,
}

impl Assessment {
    fn answer(&self, record: AnswerRecord) {
        self.answers.borrow_mut().push(record);
    }

    fn report(&self) -> ScoreReport {
        self.report
            .borrow()
            .unwrap_or_else(|| panic!("answers should be scored before checking results"))
    }
}

#[fixture]
/// Start each scenario with no answers.
pub fn assessment() -> Assessment {
    Assessment {
        answers: RefCell::new(Vec::new()),
        report: RefCell::new(None),
    }
}

#[given("a fresh assessment")]
fn fresh_assessment(assessment: &Assessment) {
    assessment.answers.borrow_mut().clear();
    assessment.report.replace(None);
}

#[when("the user picks the correct soil pH answer")]
fn correct_soil_answer(assessment: &Assessment) {
    assessment.answer(AnswerRecord::new(
        "domain_1",
        "Acidity or alkalinity levels",
        Category::Technical,
        "soil_knowledge",
    ));
}

#[when("the user picks moisture levels for the soil pH question")]
fn wrong_soil_answer(assessment: &Assessment) {
    assessment.answer(AnswerRecord::new(
        "domain_1",
        "Moisture levels",
        Category::Technical,
        "soil_knowledge",
    ));
}

#[when("the user confirms they will commit to the role")]
fn commit_to_role(assessment: &Assessment) {
    assessment.answer(AnswerRecord::new("will_1", true, Category::Wiscar, "will"));
}

#[when("the user rates interest_1 at 4 and interest_2 at 6")]
fn rate_interest(assessment: &Assessment) {
    assessment.answer(AnswerRecord::new(
        "interest_1",
        4_u8,
        Category::Psychometric,
        "interest",
    ));
    assessment.answer(AnswerRecord::new(
        "interest_2",
        6_u8,
        Category::Psychometric,
        "interest",
    ));
}

#[when("the answers are scored")]
fn score_answers(assessment: &Assessment) {
    let report = compute(&assessment.answers.borrow());
    assessment.report.replace(Some(report));
}

#[then("the domain score is 100")]
fn domain_full_marks(assessment: &Assessment) {
    assert_eq!(assessment.report().domain_score, 100);
}

#[then("the domain score is 29")]
fn domain_penalised(assessment: &Assessment) {
    assert_eq!(assessment.report().domain_score, 29);
}

#[then("the will score is 100")]
fn will_full_marks(assessment: &Assessment) {
    assert_eq!(assessment.report().wiscar_scores.will, 100);
}

#[then("the overall score is 4")]
fn overall_from_will_only(assessment: &Assessment) {
    assert_eq!(assessment.report().overall_score, 4);
}

#[then("the interest score is 71")]
fn interest_averaged(assessment: &Assessment) {
    assert_eq!(assessment.report().interest_score, 71);
}

#[then("the WISCAR interest score matches the interest score")]
fn wiscar_interest_mirrors(assessment: &Assessment) {
    let report = assessment.report();
    assert_eq!(report.wiscar_scores.interest, report.interest_score);
}

#[then("every score is zero")]
fn all_zero(assessment: &Assessment) {
    assert_eq!(assessment.report(), ScoreReport::default());
}

#[then("the recommendation is to consider alternatives")]
fn consider_alternatives(assessment: &Assessment) {
    assert_eq!(
        assessment.report().recommendation(),
        FitBand::ConsiderAlternatives
    );
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn correct_domain_answer(assessment: Assessment) {
    let _ = assessment;
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn wrong_domain_answer(assessment: Assessment) {
    let _ = assessment;
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn committed_will(assessment: Assessment) {
    let _ = assessment;
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn averaged_interest(assessment: Assessment) {
    let _ = assessment;
}

#[scenario(path = "tests/features/scoring.feature", index = 4)]
fn empty_assessment(assessment: Assessment) {
    let _ = assessment;
}
