//! Error types emitted by the configurator CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use configurator_core::{ProductError, RecommendError};
use configurator_pipeline::WideningPolicyError;
use thiserror::Error;

/// Errors emitted by the configurator CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The widening options do not form a valid policy.
    #[error("invalid widening settings: {0}")]
    InvalidWidening(#[from] WideningPolicyError),
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option naming the path.
        field: &'static str,
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option naming the path.
        field: &'static str,
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A catalogue record failed integrity checks.
    #[error("catalogue at {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Offending record.
        #[source]
        source: ProductError,
    },
    /// The request did not describe a valid profile.
    #[error("request in {path:?} was rejected: {source}")]
    Recommend {
        /// Request path.
        path: Utf8PathBuf,
        /// Rejection reason.
        #[source]
        source: RecommendError,
    },
    /// Serialising the recommendation cards failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseCards(#[source] serde_json::Error),
    /// Writing the recommendations failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
