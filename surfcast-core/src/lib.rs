//! Core domain types for the Surfcast engine.
//!
//! The crate turns raw marine forecast points into per-beach surf ratings:
//! - [`GeoPosition`] buckets compass bearings into cardinal directions.
//! - [`Rating`] scores a single [`ForecastPoint`] for a [`Beach`].
//! - [`Forecast`] drives a [`ForecastProvider`] across many beaches and
//!   groups the rated points by calendar day.
//!
//! Network access lives behind the [`ForecastProvider`] trait so the rules in
//! this crate stay pure and testable with the doubles in [`test_support`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod beach;
pub mod forecast;
pub mod forecast_provider;
mod geo_position;
mod point;
pub mod rating;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use beach::{Beach, BeachError};
pub use forecast::{BeachForecast, Forecast, ForecastProcessingError, TimeForecast};
pub use forecast_provider::{ForecastProvider, ForecastProviderError};
pub use geo_position::{GeoPosition, ParseGeoPositionError};
pub use point::ForecastPoint;
pub use rating::Rating;
