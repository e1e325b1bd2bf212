//! Subcategory groupings pooled into each sub-score.
//!
//! Answers in every subcategory of a group are averaged together as one pool,
//! not as an average of per-subcategory averages.

/// Interest in environmental work.
pub const INTEREST: &[&str] = &["interest"];
/// Motivation for the career.
pub const MOTIVATION: &[&str] = &["motivation"];
/// Personality fit.
pub const PERSONALITY: &[&str] = &["cognitive_style", "stress_management", "work_preference"];
/// General aptitude.
pub const APTITUDE: &[&str] = &["numerical", "logical"];
/// Soil and water domain knowledge.
pub const DOMAIN: &[&str] = &[
    "soil_knowledge",
    "water_knowledge",
    "assessment_methods",
    "regulations",
    "conservation_practices",
];
/// WISCAR will.
pub const WILL: &[&str] = &["will"];
/// WISCAR skill.
pub const SKILL: &[&str] = &["skill"];
/// WISCAR cognitive readiness.
pub const COGNITIVE: &[&str] = &["cognitive"];
/// WISCAR ability to learn.
pub const ABILITY: &[&str] = &["ability"];
/// WISCAR reality of job fit.
pub const REALITY: &[&str] = &["reality"];
