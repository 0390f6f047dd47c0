//! Beach records consumed by the rating engine.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::GeoPosition;

const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;

/// A surf spot with a location and the direction it faces.
///
/// Beaches are created and persisted elsewhere; the engine only reads them.
///
/// # Examples
///
/// ```
/// use surfcast_core::{Beach, GeoPosition};
///
/// # fn main() -> Result<(), surfcast_core::BeachError> {
/// let beach = Beach::new("Manly", -33.792726, 151.289824, GeoPosition::E)?;
/// assert_eq!(beach.position, GeoPosition::E);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beach {
    /// Latitude in signed degrees.
    pub lat: f64,
    /// Longitude in signed degrees.
    pub lng: f64,
    /// Human-readable name.
    pub name: String,
    /// Direction the beach faces.
    pub position: GeoPosition,
    /// Opaque reference to the owning user, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub user: Option<String>,
}

/// Errors returned by [`Beach::new`] and [`Beach::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeachError {
    /// The name was empty or whitespace.
    #[error("beach name must not be blank")]
    EmptyName,
    /// Latitude was outside `[-90, 90]` or not finite.
    #[error("latitude {lat} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        lat: f64,
    },
    /// Longitude was outside `[-180, 180]` or not finite.
    #[error("longitude {lng} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        lng: f64,
    },
}

impl Beach {
    /// Validates and constructs a [`Beach`] without an owning user.
    ///
    /// # Errors
    ///
    /// Returns [`BeachError`] when the name is blank or a coordinate is out
    /// of range.
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        position: GeoPosition,
    ) -> Result<Self, BeachError> {
        let beach = Self {
            lat,
            lng,
            name: name.into(),
            position,
            user: None,
        };
        beach.validate()?;
        Ok(beach)
    }

    /// Attach an owning-user reference.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Check the invariants enforced by [`Beach::new`].
    ///
    /// Useful for records deserialized from external input.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), BeachError> {
        if self.name.trim().is_empty() {
            return Err(BeachError::EmptyName);
        }
        // `contains` is false for NaN, so non-finite values are rejected too.
        if !LATITUDE.contains(&self.lat) {
            return Err(BeachError::LatitudeOutOfRange { lat: self.lat });
        }
        if !LONGITUDE.contains(&self.lng) {
            return Err(BeachError::LongitudeOutOfRange { lng: self.lng });
        }
        Ok(())
    }
}
