//! Command-line interface for scoring soilfit assessments.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod score;

pub use error::CliError;

use score::{ScoreArgs, run_score};

pub(crate) const ARG_ANSWERS: &str = "answers";
pub(crate) const ARG_RULES: &str = "rules";
pub(crate) const ENV_ANSWERS: &str = "SOILFIT_CMDS_SCORE_ANSWERS";

/// Run the soilfit CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, or input files are
/// invalid, or when writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "soilfit",
    about = "Score soil and water auditor career-fit assessments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a completed set of answers.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
