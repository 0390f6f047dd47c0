//! StormGlass marine-weather provider.
//!
//! This module provides [`StormGlassProvider`], an implementation of
//! [`surfcast_core::ForecastProvider`] that fetches hourly point forecasts
//! from the StormGlass weather API and normalizes them.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use surfcast_core::ForecastProvider;
//! use surfcast_data::stormglass::{StormGlassConfig, StormGlassProvider};
//!
//! let config = StormGlassConfig::new("my-api-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_window(Duration::from_secs(24 * 60 * 60));
//! let provider = StormGlassProvider::with_config(config)?;
//!
//! let points = provider.fetch_points(-33.792726, 151.289824)?;
//! println!("{} hourly points", points.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod response;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_SOURCE, DEFAULT_USER_AGENT, ProviderBuildError, REQUESTED_PARAMS,
    StormGlassConfig, StormGlassProvider,
};
pub use response::{SourceValue, SourceValues, StormGlassForecastResponse, StormGlassPoint};
