//! HTTP-based `ForecastProvider` using the StormGlass weather point API.
//!
//! # Architecture
//!
//! The [`ForecastProvider`] trait is synchronous so the rating engine stays
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use chrono::Utc;
use log::debug;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use surfcast_core::{ForecastPoint, ForecastProvider, ForecastProviderError};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::response::StormGlassForecastResponse;

/// Error type for [`StormGlassProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The configured base URL could not be parsed.
    #[error("invalid StormGlass base URL {base_url:?}: {source}")]
    InvalidBaseUrl {
        /// Rejected base URL.
        base_url: String,
        /// Source error from `url`.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default StormGlass API root.
pub const DEFAULT_BASE_URL: &str = "https://api.stormglass.io/v2";

/// Default upstream data source selected for every parameter.
pub const DEFAULT_SOURCE: &str = "noaa";

/// Default user agent for StormGlass requests.
pub const DEFAULT_USER_AGENT: &str = "surfcast/0.1";

/// Parameters requested from StormGlass, in wire naming.
pub const REQUESTED_PARAMS: &[&str] = &[
    "swellDirection",
    "swellHeight",
    "swellPeriod",
    "waveDirection",
    "waveHeight",
    "windDirection",
    "windSpeed",
];

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`StormGlassProvider`].
#[derive(Clone)]
pub struct StormGlassConfig {
    /// API root, e.g. `"https://api.stormglass.io/v2"`.
    pub base_url: String,
    /// Key sent in the `Authorization` header.
    pub api_key: String,
    /// Upstream data source selected for every parameter.
    pub source: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// How far ahead to request points. `None` keeps the provider's range.
    pub window: Option<Duration>,
}

impl std::fmt::Debug for StormGlassConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StormGlassConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("source", &self.source)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("window", &self.window)
            .finish()
    }
}

impl Default for StormGlassConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
            source: DEFAULT_SOURCE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            window: None,
        }
    }
}

impl StormGlassConfig {
    /// Create a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the upstream data source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Limit the forecast to `window` from the time of each request.
    #[must_use]
    pub const fn with_window(mut self, window: Duration) -> Self {
        self.window = Some(window);
        self
    }
}

/// HTTP-based forecast provider using the StormGlass weather point API.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within a multi-threaded Tokio runtime
/// it uses that runtime's handle with [`tokio::task::block_in_place`].
/// Blocking inside a `current_thread` runtime is not allowed, so there the
/// request runs on the provider's own runtime from a scoped worker thread
/// while the caller's thread waits.
pub struct StormGlassProvider {
    client: Client,
    config: StormGlassConfig,
    endpoint: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for StormGlassProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StormGlassProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl StormGlassProvider {
    /// Create a provider with default configuration and `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(StormGlassConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse, or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: StormGlassConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = point_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime,
        })
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &StormGlassConfig {
        &self.config
    }

    /// Build the request URL for a coordinate.
    ///
    /// `end` is the Unix timestamp closing the forecast window, if any.
    fn build_point_url(&self, lat: f64, lng: f64, end: Option<i64>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("lat", &lat.to_string())
                .append_pair("lng", &lng.to_string())
                .append_pair("params", &REQUESTED_PARAMS.join(","))
                .append_pair("source", &self.config.source);
            if let Some(end_secs) = end {
                query.append_pair("end", &end_secs.to_string());
            }
        }
        url
    }

    /// Unix timestamp `window` from now.
    fn window_end(&self) -> Option<i64> {
        self.config.window.map(|window| {
            let secs = i64::try_from(window.as_secs()).unwrap_or(i64::MAX);
            Utc::now().timestamp().saturating_add(secs)
        })
    }

    /// Fetch and normalize points asynchronously.
    async fn fetch_points_async(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
        let url = self.build_point_url(lat, lng, self.window_end());
        debug!("requesting StormGlass forecast from {url}");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.config.api_key)
            .send()
            .await
            .map_err(|err| request_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            let payload = response
                .text()
                .await
                .unwrap_or_else(|err| format!("failed to read response body: {err}"));
            return Err(ForecastProviderError::Response {
                status: status.as_u16(),
                payload,
            });
        }

        let body: StormGlassForecastResponse =
            response
                .json()
                .await
                .map_err(|err| ForecastProviderError::MalformedResponse {
                    message: err.to_string(),
                })?;

        Ok(body.into_points(&self.config.source))
    }
}

/// Build `{base_url}/weather/point`, tolerating a trailing slash.
fn point_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let joined = format!("{}/weather/point", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        source,
    })
}

/// Convert a transport failure into a `ForecastProviderError`.
fn request_error(error: &reqwest::Error) -> ForecastProviderError {
    ForecastProviderError::Request {
        message: error.to_string(),
    }
}

impl ForecastProvider for StormGlassProvider {
    /// Fetch the normalized forecast for a coordinate.
    ///
    /// # Runtime behaviour
    ///
    /// Inside a multi-threaded Tokio runtime the caller's handle is used via
    /// `block_in_place`. Inside a `current_thread` runtime the request is
    /// driven by the provider's own runtime on a scoped worker thread.
    /// Outside any runtime the provider's own runtime is used directly.
    fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.fetch_points_async(lat, lng)))
            }
            Ok(_) => self.fetch_points_on_worker(lat, lng),
            Err(_) => self.runtime.block_on(self.fetch_points_async(lat, lng)),
        }
    }
}

impl StormGlassProvider {
    /// Drive the request from a scoped thread, outside the caller's runtime.
    fn fetch_points_on_worker(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
        std::thread::scope(|scope| {
            scope
                .spawn(|| self.runtime.block_on(self.fetch_points_async(lat, lng)))
                .join()
                .unwrap_or_else(|_| {
                    Err(ForecastProviderError::Request {
                        message: "StormGlass worker thread panicked".to_owned(),
                    })
                })
        })
    }
}
