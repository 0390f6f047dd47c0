//! Error types emitted by the surfcast CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use surfcast_core::{BeachError, ForecastProcessingError};
use surfcast_data::stormglass::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the surfcast CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the beaches file failed.
    #[error("failed to read beaches from {path:?}: {source}")]
    ReadBeaches {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The beaches file is not a JSON array of beaches.
    #[error("failed to parse beaches JSON at {path:?}: {source}")]
    ParseBeaches {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A beach in the file failed validation.
    #[error("beach {index} in {path:?} is invalid: {source}")]
    InvalidBeach {
        path: Utf8PathBuf,
        index: usize,
        #[source]
        source: BeachError,
    },
    /// Constructing the StormGlass provider failed.
    #[error("failed to build forecast provider for {base_url:?}: {source}")]
    BuildProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Fetching or rating the forecast failed.
    #[error(transparent)]
    Forecast(#[from] ForecastProcessingError),
    /// Serializing the grouped forecast failed.
    #[error("failed to serialize forecast: {0}")]
    SerializeForecast(#[source] serde_json::Error),
    /// Writing the forecast output failed.
    #[error("failed to write forecast output: {0}")]
    WriteForecastOutput(#[source] std::io::Error),
}
