//! Facade crate for the surfcast forecast rating engine.
//!
//! This crate re-exports the core domain types and exposes the StormGlass
//! provider behind the `provider-stormglass` feature.

#![forbid(unsafe_code)]

pub use surfcast_core::{
    Beach, BeachError, BeachForecast, Forecast, ForecastPoint, ForecastProcessingError,
    ForecastProvider, ForecastProviderError, GeoPosition, ParseGeoPositionError, Rating,
    TimeForecast,
};

#[cfg(feature = "test-support")]
pub use surfcast_core::test_support;

#[cfg(feature = "provider-stormglass")]
pub use surfcast_data::stormglass::{ProviderBuildError, StormGlassConfig, StormGlassProvider};
