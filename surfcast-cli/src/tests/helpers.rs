//! Test helpers for writing beach files and stubbing the forecast provider.

use super::*;
use crate::forecast::{ForecastConfig, ForecastProviderBuilder};
use camino::{Utf8Path, Utf8PathBuf};
use surfcast_core::test_support::StubForecastProvider;
use surfcast_core::{ForecastPoint, ForecastProvider, ForecastProviderError};
use tempfile::TempDir;

pub(super) const MANLY_JSON: &str = r#"[
  { "lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E", "user": "some-id" }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding a beaches file.
pub(super) struct BeachesFile {
    _dir: TempDir,
    pub(super) path: Utf8PathBuf,
}

impl BeachesFile {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("beaches.json");
        write_utf8(&path, contents.as_bytes());
        Self { _dir: dir, path }
    }
}

/// Builds providers answering from canned points or a canned error.
pub(super) struct StubProviderBuilder {
    response: Result<Vec<ForecastPoint>, ForecastProviderError>,
}

impl StubProviderBuilder {
    pub(super) fn with_points(points: Vec<ForecastPoint>) -> Self {
        Self {
            response: Ok(points),
        }
    }

    pub(super) fn with_error(error: ForecastProviderError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl ForecastProviderBuilder for StubProviderBuilder {
    fn build(&self, _config: &ForecastConfig) -> Result<Box<dyn ForecastProvider>, CliError> {
        let stub = match &self.response {
            Ok(points) => StubForecastProvider::with_points(points.clone()),
            Err(error) => StubForecastProvider::with_error(error.clone()),
        };
        Ok(Box::new(stub))
    }
}
