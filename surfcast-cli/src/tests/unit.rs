//! Focused unit tests covering forecast CLI configuration and beach loading.

use super::helpers::{BeachesFile, MANLY_JSON, StubProviderBuilder};
use super::*;
use crate::forecast::{
    ForecastArgs, ForecastConfig, config_from_layers_for_test, load_beaches, run_forecast_with,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use std::time::Duration;
use surfcast_core::test_support::sample_points;
use surfcast_core::{ForecastProviderError, GeoPosition, TimeForecast};
use surfcast_data::stormglass::{DEFAULT_BASE_URL, DEFAULT_SOURCE};
use tempfile::TempDir;

fn args_for(path: &Utf8PathBuf) -> ForecastArgs {
    ForecastArgs {
        beaches: Some(path.clone()),
        api_key: Some("test-key".to_owned()),
        ..ForecastArgs::default()
    }
}

#[rstest]
#[case::beaches(None, Some("key"), ARG_BEACHES, ENV_BEACHES)]
#[case::api_key(Some("beaches.json"), None, ARG_API_KEY, ENV_API_KEY)]
#[case::blank_api_key(Some("beaches.json"), Some("  "), ARG_API_KEY, ENV_API_KEY)]
fn converting_without_required_fields_errors(
    #[case] beaches: Option<&str>,
    #[case] api_key: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = ForecastArgs {
        beaches: beaches.map(Utf8PathBuf::from),
        api_key: api_key.map(str::to_owned),
        ..ForecastArgs::default()
    };
    let err = ForecastConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_applies_provider_defaults() {
    let config = ForecastConfig::try_from(args_for(&Utf8PathBuf::from("beaches.json")))
        .expect("config should build");

    assert_eq!(config.beaches, Utf8PathBuf::from("beaches.json"));
    assert_eq!(config.provider.api_key, "test-key");
    assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.provider.source, DEFAULT_SOURCE);
    assert_eq!(config.provider.timeout, Duration::from_secs(30));
    assert_eq!(config.provider.window, None);
}

#[rstest]
fn config_applies_overrides() {
    let args = ForecastArgs {
        base_url: Some("http://localhost:8080/v2".to_owned()),
        source: Some("sg".to_owned()),
        timeout_secs: Some(5),
        window_hours: Some(24),
        ..args_for(&Utf8PathBuf::from("beaches.json"))
    };

    let config = ForecastConfig::try_from(args).expect("config should build");

    assert_eq!(config.provider.base_url, "http://localhost:8080/v2");
    assert_eq!(config.provider.source, "sg");
    assert_eq!(config.provider.timeout, Duration::from_secs(5));
    assert_eq!(config.provider.window, Some(Duration::from_secs(86_400)));
}

#[rstest]
fn validate_sources_reports_missing_file() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let config = ForecastConfig::try_from(args_for(&root.join("missing.json")))
        .expect("config should build");

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_BEACHES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let config = ForecastConfig::try_from(args_for(&root)).expect("config should build");

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_BEACHES);
            assert_eq!(path, root);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_beaches_decodes_json() {
    let file = BeachesFile::with_contents(MANLY_JSON);

    let beaches = load_beaches(&file.path).expect("beaches should decode");

    assert_eq!(beaches.len(), 1);
    let manly = beaches.first().expect("one beach");
    assert_eq!(manly.name, "Manly");
    assert_eq!(manly.position, GeoPosition::E);
    assert_eq!(manly.user.as_deref(), Some("some-id"));
}

#[rstest]
fn load_beaches_rejects_invalid_json() {
    let file = BeachesFile::with_contents("{ not valid json");

    let err = load_beaches(&file.path).expect_err("invalid json should error");
    match err {
        CliError::ParseBeaches { path, .. } => assert_eq!(path, file.path),
        other => panic!("expected ParseBeaches, found {other:?}"),
    }
}

#[rstest]
fn load_beaches_reports_the_invalid_entry() {
    let file = BeachesFile::with_contents(
        r#"[
          { "lat": -33.79, "lng": 151.28, "name": "Manly", "position": "E" },
          { "lat": 95.0, "lng": 151.27, "name": "Nowhere", "position": "S" }
        ]"#,
    );

    let err = load_beaches(&file.path).expect_err("invalid beach should error");
    match err {
        CliError::InvalidBeach { index, .. } => assert_eq!(index, 1),
        other => panic!("expected InvalidBeach, found {other:?}"),
    }
}

#[rstest]
fn run_forecast_writes_pretty_json() {
    let file = BeachesFile::with_contents(MANLY_JSON);
    let builder = StubProviderBuilder::with_points(sample_points());
    let mut stdout = Vec::new();

    run_forecast_with(args_for(&file.path), &builder, &mut stdout).expect("forecast succeeds");

    let text = String::from_utf8(stdout).expect("stdout utf-8");
    assert!(text.ends_with('\n'));
    let grouped: Vec<TimeForecast> = serde_json::from_str(&text).expect("grouped forecast JSON");
    assert_eq!(grouped.len(), 1);
    let ratings: Vec<u8> = grouped
        .iter()
        .flat_map(|day| day.forecast.iter().map(|record| record.rating))
        .collect();
    assert_eq!(ratings, vec![2, 2, 2]);
}

#[rstest]
fn run_forecast_maps_provider_failures() {
    let file = BeachesFile::with_contents(MANLY_JSON);
    let builder = StubProviderBuilder::with_error(ForecastProviderError::Request {
        message: "Network Error".to_owned(),
    });
    let mut stdout = Vec::new();

    let err = run_forecast_with(args_for(&file.path), &builder, &mut stdout)
        .expect_err("forecast should fail");

    assert!(matches!(err, CliError::Forecast(_)), "{err:?}");
    assert_eq!(
        err.to_string(),
        "unexpected error during the forecast processing: unexpected error when trying to \
         communicate to the forecast provider: Network Error"
    );
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "timeout_secs": "soon" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "api_key": "file-key",
            "base_url": "http://from-file:8080/v2",
        }),
        None,
    );
    composer.push_environment(json!({ "beaches": "env.json", "api_key": "env-key" }));
    composer.push_cli(json!({ "api_key": "cli-key" }));

    let config = config_from_layers_for_test(composer.layers()).expect("config should merge");

    assert_eq!(config.beaches, Utf8PathBuf::from("env.json"));
    assert_eq!(config.provider.api_key, "cli-key");
    assert_eq!(config.provider.base_url, "http://from-file:8080/v2");
}
