//! Score command implementation for the soilfit CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use soilfit_core::{AnswerRecord, Calculator, FitBand, ResponseSet, ScoreReport};
use soilfit_fs::open_utf8_file;
use soilfit_scorer::{AssessmentScorer, ScoringRules};
use std::io::{BufReader, Write};

use crate::{ARG_ANSWERS, ARG_RULES, CliError, ENV_ANSWERS};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a completed assessment. Answers are read from a JSON \
                 array of answer records; repeated answers to the same \
                 question keep the last one. Scoring rules may be replaced \
                 with a JSON rule table.",
    about = "Score a completed assessment"
)]
#[ortho_config(prefix = "SOILFIT")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the answer records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers: Option<Utf8PathBuf>,
    /// Path to a JSON scoring rule table replacing the built-in rules.
    #[arg(long = ARG_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON answers file.
    pub(crate) answers: Utf8PathBuf,
    /// Optional rule table override.
    pub(crate) rules: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.answers, ARG_ANSWERS)?;
        if let Some(rules) = &self.rules {
            Self::require_existing(rules, ARG_RULES)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match soilfit_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn scorer(&self) -> Result<AssessmentScorer, CliError> {
        let rules = match &self.rules {
            Some(path) => {
                debug!("loading scoring rules from {path}");
                ScoringRules::load(path).map_err(CliError::LoadRules)?
            }
            None => ScoringRules::default(),
        };
        Ok(AssessmentScorer::new(rules))
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_ANSWERS,
        })?;
        Ok(Self {
            answers,
            rules: args.rules,
        })
    }
}

/// JSON document printed by the `score` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ScoreOutput {
    pub(crate) report: ScoreReport,
    pub(crate) recommendation: FitBand,
    pub(crate) title: String,
    pub(crate) description: String,
}

impl From<ScoreReport> for ScoreOutput {
    fn from(report: ScoreReport) -> Self {
        let recommendation = report.recommendation();
        Self {
            report,
            recommendation,
            title: recommendation.title().to_owned(),
            description: recommendation.description().to_owned(),
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let output = execute_score(&config)?;
    write_score_output(writer, &output)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<ScoreOutput, CliError> {
    let scorer = config.scorer()?;
    let responses = load_answers(&config.answers)?;
    let report = scorer.compute(responses.records());
    info!(
        "scored {} answers from {}: overall {}",
        responses.len(),
        config.answers,
        report.overall_score
    );
    Ok(ScoreOutput::from(report))
}

/// Load answer records from disk, keeping the last answer to each question.
pub(crate) fn load_answers(path: &Utf8Path) -> Result<ResponseSet, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenAnswers {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<AnswerRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseAnswers {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let submitted = records.len();
    let responses: ResponseSet = records.into_iter().collect();
    if responses.len() < submitted {
        debug!(
            "{} repeated answers in {path} replaced earlier ones",
            submitted - responses.len()
        );
    }
    responses
        .validate()
        .map_err(|source| CliError::InvalidAnswers {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(responses)
}

fn write_score_output(writer: &mut dyn Write, output: &ScoreOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
