//! Error types emitted by the soilfit CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use soilfit_core::AnswerRecordError;
use soilfit_scorer::ScoringConfigError;
use thiserror::Error;

/// Errors emitted by the soilfit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass <{field}> or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument naming the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the answers file failed.
    #[error("failed to open answers at {path:?}: {source}")]
    OpenAnswers {
        /// Answers file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The answers file did not contain a JSON array of answer records.
    #[error("failed to parse answers JSON at {path:?}: {source}")]
    ParseAnswers {
        /// Answers file path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// An answer record failed validation.
    #[error("answers in {path:?} failed validation: {source}")]
    InvalidAnswers {
        /// Answers file path.
        path: Utf8PathBuf,
        /// First invalid record.
        #[source]
        source: AnswerRecordError,
    },
    /// Loading the scoring rules override failed.
    #[error("failed to load scoring rules: {0}")]
    LoadRules(#[source] ScoringConfigError),
    /// Serialising the score output failed.
    #[error("failed to serialise score output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the score output failed.
    #[error("failed to write score output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
