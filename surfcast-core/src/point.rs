//! Normalized forecast samples.

use chrono::{DateTime, Utc};

/// One provider time sample mapped onto the engine's schema.
///
/// Every field is required: providers drop incomplete samples before
/// handing points to the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ForecastPoint {
    /// Sample timestamp.
    pub time: DateTime<Utc>,
    /// Bearing the swell arrives from, in degrees.
    pub swell_direction: f64,
    /// Swell height in metres.
    pub swell_height: f64,
    /// Seconds between successive swell crests.
    pub swell_period: f64,
    /// Bearing the combined sea arrives from, in degrees.
    pub wave_direction: f64,
    /// Combined sea height in metres.
    pub wave_height: f64,
    /// Bearing the wind blows from, in degrees.
    pub wind_direction: f64,
    /// Wind speed in metres per second. Carried through, never rated.
    pub wind_speed: f64,
}
