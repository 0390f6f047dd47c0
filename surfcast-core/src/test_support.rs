//! Test doubles and sample data for unit and behaviour tests.
//!
//! [`StubForecastProvider`] answers from pre-configured responses without
//! touching the network and counts how often it was called.

use std::cell::Cell;

use chrono::{DateTime, TimeZone, Utc};

use crate::{Beach, ForecastPoint, ForecastProvider, ForecastProviderError, GeoPosition};

type StubResponse = Result<Vec<ForecastPoint>, ForecastProviderError>;

/// Deterministic `ForecastProvider` returning canned responses.
///
/// Responses registered for an exact coordinate win over the fallback
/// response. Without either, the provider returns no points.
///
/// # Example
///
/// ```
/// use surfcast_core::ForecastProvider;
/// use surfcast_core::test_support::{StubForecastProvider, sample_points};
///
/// let provider = StubForecastProvider::with_points(sample_points());
/// let points = provider.fetch_points(-33.79, 151.28).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(provider.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StubForecastProvider {
    fallback: Option<StubResponse>,
    by_coordinate: Vec<((f64, f64), StubResponse)>,
    calls: Cell<usize>,
}

impl StubForecastProvider {
    /// Create a provider returning `points` for every coordinate.
    #[must_use]
    pub fn with_points(points: Vec<ForecastPoint>) -> Self {
        Self {
            fallback: Some(Ok(points)),
            ..Self::default()
        }
    }

    /// Create a provider failing with `error` for every coordinate.
    #[must_use]
    pub fn with_error(error: ForecastProviderError) -> Self {
        Self {
            fallback: Some(Err(error)),
            ..Self::default()
        }
    }

    /// Return `points` for the exact coordinate `lat`/`lng`.
    #[must_use]
    pub fn with_points_at(mut self, lat: f64, lng: f64, points: Vec<ForecastPoint>) -> Self {
        self.by_coordinate.push(((lat, lng), Ok(points)));
        self
    }

    /// Fail with `error` for the exact coordinate `lat`/`lng`.
    #[must_use]
    pub fn with_error_at(mut self, lat: f64, lng: f64, error: ForecastProviderError) -> Self {
        self.by_coordinate.push(((lat, lng), Err(error)));
        self
    }

    /// Number of `fetch_points` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ForecastProvider for StubForecastProvider {
    fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
        self.calls.set(self.calls.get() + 1);
        self.by_coordinate
            .iter()
            .find(|((stub_lat, stub_lng), _)| *stub_lat == lat && *stub_lng == lng)
            .map(|(_, response)| response)
            .or_else(|| self.fallback.as_ref())
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Manly beach, facing east.
#[must_use]
pub fn manly_beach() -> Beach {
    Beach {
        lat: -33.792_726,
        lng: 151.289_824,
        name: "Manly".to_owned(),
        position: GeoPosition::E,
        user: Some("some-id".to_owned()),
    }
}

/// The first sample point, moved to `time`.
///
/// Rates 2 for an east-facing beach.
#[must_use]
pub fn sample_point_at(time: DateTime<Utc>) -> ForecastPoint {
    ForecastPoint {
        time,
        swell_direction: 64.26,
        swell_height: 0.15,
        swell_period: 3.89,
        wave_direction: 231.38,
        wave_height: 0.47,
        wind_direction: 299.45,
        wind_speed: 100.0,
    }
}

/// Three hourly points for 2020-04-26, as normalized from the StormGlass
/// fixture used across the workspace.
#[must_use]
pub fn sample_points() -> Vec<ForecastPoint> {
    vec![
        sample_point_at(hour(0)),
        ForecastPoint {
            time: hour(1),
            swell_direction: 123.41,
            swell_height: 0.21,
            swell_period: 3.67,
            wave_direction: 232.12,
            wave_height: 0.46,
            wind_direction: 310.48,
            wind_speed: 100.0,
        },
        ForecastPoint {
            time: hour(2),
            swell_direction: 182.56,
            swell_height: 0.28,
            swell_period: 3.44,
            wave_direction: 232.86,
            wave_height: 0.46,
            wind_direction: 321.5,
            wind_speed: 100.0,
        },
    ]
}

fn hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 4, 26, hour, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
