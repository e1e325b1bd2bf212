#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Wire-format coverage for answer records and score reports.
#![cfg(feature = "serde")]

use rstest::rstest;
use soilfit_core::{AnswerRecord, AnswerValue, Category, ScoreReport, WiscarScores};

#[rstest]
#[case("5", AnswerValue::Number(5.0))]
#[case("4.5", AnswerValue::Number(4.5))]
#[case("true", AnswerValue::Boolean(true))]
#[case(r#""false""#, AnswerValue::Boolean(false))]
#[case(r#""Buffer strips along waterways""#, AnswerValue::Choice("Buffer strips along waterways".into()))]
fn parses_answer_values(#[case] json: &str, #[case] expected: AnswerValue) {
    let value: AnswerValue = serde_json::from_str(json).expect("valid answer value");
    assert_eq!(value, expected);
}

#[rstest]
fn booleans_serialise_as_tokens() {
    let json = serde_json::to_string(&AnswerValue::Boolean(true)).expect("serialise flag");
    assert_eq!(json, r#""true""#);
}

#[rstest]
fn parses_collaborator_record() {
    let json = r#"{
        "questionId": "domain_1",
        "answer": "Acidity or alkalinity levels",
        "category": "technical",
        "subcategory": "soil_knowledge"
    }"#;
    let record: AnswerRecord = serde_json::from_str(json).expect("valid record");
    assert_eq!(
        record,
        AnswerRecord::new(
            "domain_1",
            "Acidity or alkalinity levels",
            Category::Technical,
            "soil_knowledge"
        )
    );
}

#[rstest]
fn rejects_unknown_category() {
    let json = r#"{"questionId":"x","answer":1,"category":"aptitude","subcategory":"numerical"}"#;
    assert!(serde_json::from_str::<AnswerRecord>(json).is_err());
}

#[rstest]
fn report_uses_camel_case_keys() {
    let report = ScoreReport {
        overall_score: 71,
        wiscar_scores: WiscarScores {
            will: 100,
            ..WiscarScores::default()
        },
        ..ScoreReport::default()
    };
    let value = serde_json::to_value(report).expect("serialise report");
    assert_eq!(value.pointer("/overallScore"), Some(&serde_json::json!(71)));
    assert_eq!(
        value.pointer("/wiscarScores/will"),
        Some(&serde_json::json!(100))
    );
    assert!(value.get("prerequisiteScore").is_some());
}
