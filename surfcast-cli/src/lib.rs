//! Command-line interface for rating surf forecasts.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod forecast;

pub use error::CliError;

use forecast::{ForecastArgs, run_forecast};

pub(crate) const ARG_BEACHES: &str = "beaches";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ARG_SOURCE: &str = "source";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_WINDOW_HOURS: &str = "window-hours";
pub(crate) const ENV_BEACHES: &str = "SURFCAST_CMDS_FORECAST_BEACHES";
pub(crate) const ENV_API_KEY: &str = "SURFCAST_CMDS_FORECAST_API_KEY";

/// Run the surfcast CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration, loading the
/// beaches, fetching forecasts or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Forecast(args) => run_forecast(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "surfcast",
    about = "Rate surf conditions for a set of beaches",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch, rate and group forecasts for the beaches in a JSON file.
    Forecast(ForecastArgs),
}

#[cfg(test)]
mod tests;
