//! Error types emitted by the Watchgrid CLI.

use camino::Utf8PathBuf;
use thiserror::Error;
use watchgrid_core::{CoverageRequestError, OptimizeError};

/// Errors emitted by the Watchgrid CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Opening the plan request file failed.
    #[error("failed to open plan request at {path:?}: {source}")]
    OpenPlanRequest {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Plan request JSON could not be decoded.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The plan request payload failed validation.
    #[error("plan request in {path:?} failed validation: {source}")]
    InvalidPlanRequest {
        /// Path of the rejected file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: CoverageRequestError,
    },
    /// The optimizer rejected the request.
    #[error("optimizer failed: {source}")]
    Optimize {
        /// Failure reported by the optimizer.
        source: OptimizeError,
    },
    /// Serializing the coverage plan failed.
    #[error("failed to serialize coverage plan: {0}")]
    SerializePlan(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
