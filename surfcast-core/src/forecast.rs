//! Rate forecasts for many beaches and group them by day.
//!
//! [`Forecast`] fetches points for each beach from a [`ForecastProvider`],
//! rates them with a beach-scoped [`Rating`], merges every record into one
//! time-ordered sequence and groups it by calendar date.
//!
//! Processing is all-or-nothing: one failed fetch aborts the batch with a
//! [`ForecastProcessingError`].

use chrono::NaiveDate;
use log::{debug, warn};
use thiserror::Error;

use crate::{Beach, ForecastPoint, ForecastProvider, GeoPosition, Rating};

/// A rated forecast point for one beach.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeachForecast {
    /// Beach latitude.
    pub lat: f64,
    /// Beach longitude.
    pub lng: f64,
    /// Beach name.
    pub name: String,
    /// Beach orientation.
    pub position: GeoPosition,
    /// Surf quality from 1 to 5.
    pub rating: u8,
    /// The rated sample.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub point: ForecastPoint,
}

impl BeachForecast {
    /// Rate `point` for `beach` and attach the beach metadata.
    #[must_use]
    pub fn rate(beach: &Beach, rating: Rating, point: ForecastPoint) -> Self {
        Self {
            lat: beach.lat,
            lng: beach.lng,
            name: beach.name.clone(),
            position: beach.position,
            rating: rating.rate_point(&point),
            point,
        }
    }
}

/// Every rated record falling on one calendar day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeForecast {
    /// UTC calendar date shared by all records.
    pub date: NaiveDate,
    /// Records in ascending time order.
    pub forecast: Vec<BeachForecast>,
}

/// The single failure mode of [`Forecast::process_forecast_for_beaches`].
///
/// Only the message of the underlying cause is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected error during the forecast processing: {message}")]
pub struct ForecastProcessingError {
    /// Message of the underlying failure.
    pub message: String,
}

impl ForecastProcessingError {
    /// Wrap any displayable failure.
    pub fn wrap(cause: impl std::fmt::Display) -> Self {
        Self {
            message: cause.to_string(),
        }
    }
}

/// Aggregate rated forecasts for a set of beaches.
///
/// # Examples
///
/// ```
/// use surfcast_core::{Forecast, ForecastPoint, ForecastProvider, ForecastProviderError};
///
/// struct NoData;
///
/// impl ForecastProvider for NoData {
///     fn fetch_points(&self, _: f64, _: f64) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let forecast = Forecast::new(NoData);
/// let grouped = forecast.process_forecast_for_beaches(&[])?;
/// assert!(grouped.is_empty());
/// # Ok::<(), surfcast_core::ForecastProcessingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Forecast<P> {
    provider: P,
}

impl<P: ForecastProvider> Forecast<P> {
    /// Create an aggregator backed by `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetch, rate and group forecasts for `beaches`.
    ///
    /// Beaches are fetched one after another. Records from every beach are
    /// stable-sorted by timestamp before grouping, so the output does not
    /// depend on fetch order. An empty slice returns an empty response
    /// without calling the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastProcessingError`] carrying the provider's message
    /// when any fetch fails. No partial result is returned.
    pub fn process_forecast_for_beaches(
        &self,
        beaches: &[Beach],
    ) -> Result<Vec<TimeForecast>, ForecastProcessingError> {
        let mut records = Vec::new();
        for beach in beaches {
            records.extend(self.rate_beach(beach)?);
        }
        records.sort_by_key(|record| record.point.time);
        Ok(group_by_date(records))
    }

    fn rate_beach(&self, beach: &Beach) -> Result<Vec<BeachForecast>, ForecastProcessingError> {
        let points = self
            .provider
            .fetch_points(beach.lat, beach.lng)
            .map_err(|err| {
                warn!("forecast fetch for beach {:?} failed: {err}", beach.name);
                ForecastProcessingError::wrap(err)
            })?;
        debug!(
            "rating {} forecast points for beach {:?}",
            points.len(),
            beach.name
        );
        let rating = Rating::for_beach(beach);
        Ok(points
            .into_iter()
            .map(|point| BeachForecast::rate(beach, rating, point))
            .collect())
    }
}

/// Group time-sorted records into consecutive calendar days.
///
/// Points carry UTC timestamps, so a day is a UTC calendar date whatever
/// offset the provider reported.
fn group_by_date(records: Vec<BeachForecast>) -> Vec<TimeForecast> {
    let mut groups: Vec<TimeForecast> = Vec::new();
    for record in records {
        let date = record.point.time.date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.forecast.push(record),
            _ => groups.push(TimeForecast {
                date,
                forecast: vec![record],
            }),
        }
    }
    groups
}
