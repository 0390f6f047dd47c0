//! StormGlass point-forecast response types.
//!
//! The weather point endpoint returns an `hours` array. Each entry carries a
//! timestamp and, per requested parameter, an object keyed by upstream data
//! source (`noaa`, `sg`, `icon`, ...):
//!
//! ```json
//! { "time": "2020-04-26T00:00:00+00:00", "swellHeight": { "noaa": 0.15, "sg": 0.2 } }
//! ```
//!
//! See: <https://docs.stormglass.io/#/weather>

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use serde::Deserialize;
use serde::de::IgnoredAny;
use surfcast_core::ForecastPoint;

/// Values for one parameter keyed by upstream source name.
pub type SourceValues = BTreeMap<String, SourceValue>;

/// One source's reading for a parameter.
///
/// Sources the caller never selects may carry anything; a value that is not
/// a number decodes as [`SourceValue::Unusable`] instead of failing the body.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SourceValue {
    /// A numeric reading.
    Number(f64),
    /// `null`, text or any other non-numeric value.
    Unusable(IgnoredAny),
}

impl SourceValue {
    /// The reading, if numeric.
    #[must_use]
    pub const fn as_f64(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Unusable(_) => None,
        }
    }
}

/// StormGlass weather point response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StormGlassForecastResponse {
    /// Hourly samples in ascending time order.
    #[serde(default)]
    pub hours: Vec<StormGlassPoint>,
}

/// One hourly sample as returned by StormGlass.
///
/// Every field is optional on the wire; [`StormGlassPoint::normalize`]
/// decides whether the sample is complete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormGlassPoint {
    /// Sample timestamp, RFC 3339.
    pub time: Option<String>,
    /// Swell direction per source.
    pub swell_direction: Option<SourceValues>,
    /// Swell height per source.
    pub swell_height: Option<SourceValues>,
    /// Swell period per source.
    pub swell_period: Option<SourceValues>,
    /// Wave direction per source.
    pub wave_direction: Option<SourceValues>,
    /// Wave height per source.
    pub wave_height: Option<SourceValues>,
    /// Wind direction per source.
    pub wind_direction: Option<SourceValues>,
    /// Wind speed per source.
    pub wind_speed: Option<SourceValues>,
}

impl StormGlassPoint {
    /// Flatten the sample using `source` for every parameter.
    ///
    /// Returns `None` when the timestamp is missing or unparseable, or when
    /// any parameter lacks a value for `source`.
    #[must_use]
    pub fn normalize(&self, source: &str) -> Option<ForecastPoint> {
        let pick = |values: &Option<SourceValues>| -> Option<f64> {
            values.as_ref()?.get(source).copied().and_then(SourceValue::as_f64)
        };
        Some(ForecastPoint {
            time: parse_time(self.time.as_deref()?)?,
            swell_direction: pick(&self.swell_direction)?,
            swell_height: pick(&self.swell_height)?,
            swell_period: pick(&self.swell_period)?,
            wave_direction: pick(&self.wave_direction)?,
            wave_height: pick(&self.wave_height)?,
            wind_direction: pick(&self.wind_direction)?,
            wind_speed: pick(&self.wind_speed)?,
        })
    }
}

impl StormGlassForecastResponse {
    /// Normalize every complete sample, preserving provider order.
    #[must_use]
    pub fn into_points(self, source: &str) -> Vec<ForecastPoint> {
        let total = self.hours.len();
        let points: Vec<ForecastPoint> = self
            .hours
            .iter()
            .filter_map(|hour| hour.normalize(source))
            .collect();
        if points.len() < total {
            debug!(
                "dropped {} of {total} StormGlass points missing {source:?} values",
                total - points.len()
            );
        }
        points
    }
}

/// Parse an RFC 3339 timestamp, reading offset-less values as UTC.
///
/// Offsets are folded into UTC here, so downstream day grouping uses the
/// UTC calendar date rather than the offset's local date.
fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|time| time.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|t| t.and_utc()))
        .ok()
}
