//! Forecast command implementation for the surfcast CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfcast_core::{Beach, Forecast, ForecastProvider, TimeForecast};
use surfcast_data::stormglass::{StormGlassConfig, StormGlassProvider};

use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_BEACHES, ARG_SOURCE, ARG_TIMEOUT_SECS, ARG_WINDOW_HOURS,
    CliError, ENV_API_KEY, ENV_BEACHES,
};

const SECS_PER_HOUR: u64 = 3_600;

/// CLI arguments for the `forecast` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "forecast",
    long_about = "Fetch the StormGlass forecast for every beach in a JSON \
                 file, rate each hourly point from 1 to 5 and print the \
                 records grouped by day. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rate the forecast for a set of beaches"
)]
#[ortho_config(prefix = "SURFCAST")]
pub(crate) struct ForecastArgs {
    /// Path to a JSON array of beaches.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) beaches: Option<Utf8PathBuf>,
    /// StormGlass API key.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// StormGlass API root (e.g. "https://api.stormglass.io/v2").
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Upstream data source selected for every parameter (e.g. "noaa").
    #[arg(long = ARG_SOURCE, value_name = "name")]
    #[serde(default)]
    pub(crate) source: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Only request points up to this many hours ahead.
    #[arg(long = ARG_WINDOW_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) window_hours: Option<u64>,
}

impl ForecastArgs {
    pub(crate) fn into_config(self) -> Result<ForecastConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ForecastConfig::try_from(merged)
    }
}

/// Resolved `forecast` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct ForecastConfig {
    /// Path to the beaches JSON file.
    pub(crate) beaches: Utf8PathBuf,
    /// Provider settings with defaults applied.
    pub(crate) provider: StormGlassConfig,
}

impl ForecastConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.beaches, ARG_BEACHES)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match surfcast_fs::file_is_file(path) {
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

impl TryFrom<ForecastArgs> for ForecastConfig {
    type Error = CliError;

    fn try_from(args: ForecastArgs) -> Result<Self, Self::Error> {
        let beaches = args.beaches.ok_or(CliError::MissingArgument {
            field: ARG_BEACHES,
            env: ENV_BEACHES,
        })?;
        let api_key = args
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_API_KEY,
                env: ENV_API_KEY,
            })?;

        let mut provider = StormGlassConfig::new(api_key);
        if let Some(base_url) = args.base_url {
            provider = provider.with_base_url(base_url);
        }
        if let Some(source) = args.source {
            provider = provider.with_source(source);
        }
        if let Some(secs) = args.timeout_secs {
            provider = provider.with_timeout(Duration::from_secs(secs));
        }
        if let Some(hours) = args.window_hours {
            provider = provider.with_window(Duration::from_secs(hours.saturating_mul(SECS_PER_HOUR)));
        }

        Ok(Self { beaches, provider })
    }
}

/// Builds the forecast provider for the current invocation.
pub(crate) trait ForecastProviderBuilder {
    fn build(&self, config: &ForecastConfig) -> Result<Box<dyn ForecastProvider>, CliError>;
}

pub(crate) struct StormGlassProviderBuilder;

impl ForecastProviderBuilder for StormGlassProviderBuilder {
    fn build(&self, config: &ForecastConfig) -> Result<Box<dyn ForecastProvider>, CliError> {
        let provider = StormGlassProvider::with_config(config.provider.clone()).map_err(|source| {
            CliError::BuildProvider {
                base_url: config.provider.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_forecast(args: ForecastArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_forecast_with(args, &StormGlassProviderBuilder, &mut stdout)
}

pub(crate) fn run_forecast_with(
    args: ForecastArgs,
    builder: &dyn ForecastProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let grouped = execute_forecast(args, builder)?;
    write_forecast(writer, &grouped)
}

fn execute_forecast(
    args: ForecastArgs,
    builder: &dyn ForecastProviderBuilder,
) -> Result<Vec<TimeForecast>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let beaches = load_beaches(&config.beaches)?;
    debug!("loaded {} beaches from {}", beaches.len(), config.beaches);
    let provider = builder.build(&config)?;
    Ok(Forecast::new(provider).process_forecast_for_beaches(&beaches)?)
}

/// Loads and validates a JSON array of [`Beach`] records.
pub(crate) fn load_beaches(path: &Utf8Path) -> Result<Vec<Beach>, CliError> {
    let contents = surfcast_fs::read_utf8_to_string(path).map_err(|source| {
        CliError::ReadBeaches {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let beaches: Vec<Beach> =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseBeaches {
            path: path.to_path_buf(),
            source,
        })?;
    for (index, beach) in beaches.iter().enumerate() {
        beach.validate().map_err(|source| CliError::InvalidBeach {
            path: path.to_path_buf(),
            index,
            source,
        })?;
    }
    Ok(beaches)
}

fn write_forecast(writer: &mut dyn Write, grouped: &[TimeForecast]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(grouped).map_err(CliError::SerializeForecast)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteForecastOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteForecastOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ForecastConfig, CliError> {
    let merged = ForecastArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ForecastConfig::try_from(merged)
}
