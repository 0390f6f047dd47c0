//! Surf-quality ratings for forecast points.
//!
//! A [`Rating`] is scoped to one beach and turns a [`ForecastPoint`] into an
//! integer score from 1 (poor) to 5 (excellent). The score averages three
//! independent sub-ratings:
//!
//! - wind/wave alignment relative to the beach orientation,
//! - swell height,
//! - swell period.

use std::ops::{Range, RangeFrom};

use crate::{Beach, ForecastPoint, GeoPosition};

/// Ankle to knee high.
const ANKLE_TO_KNEE: Range<f64> = 0.3..1.0;
/// Waist high.
const WAIST_HIGH: Range<f64> = 1.0..2.0;
/// Head high or bigger.
const HEAD_HIGH: RangeFrom<f64> = 2.0..;

const SHORT_PERIOD: Range<f64> = 7.0..10.0;
const MEDIUM_PERIOD: Range<f64> = 10.0..14.0;
const LONG_PERIOD: RangeFrom<f64> = 14.0..;

/// Lowest score any rating can return.
pub const MIN_RATING: u8 = 1;
/// Highest score any rating can return.
pub const MAX_RATING: u8 = 5;

/// Beach-scoped rating engine.
///
/// The engine only captures the beach orientation, so it is cheap to build
/// per beach and can be copied freely.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use surfcast_core::{Beach, ForecastPoint, GeoPosition, Rating};
///
/// # fn main() -> Result<(), surfcast_core::BeachError> {
/// let beach = Beach::new("Manly", -33.79, 151.28, GeoPosition::E)?;
/// let point = ForecastPoint {
///     time: Utc.with_ymd_and_hms(2020, 4, 26, 0, 0, 0).unwrap(),
///     swell_direction: 64.26,
///     swell_height: 0.15,
///     swell_period: 3.89,
///     wave_direction: 231.38,
///     wave_height: 0.47,
///     wind_direction: 299.45,
///     wind_speed: 100.0,
/// };
/// assert_eq!(Rating::for_beach(&beach).rate_point(&point), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    beach_position: GeoPosition,
}

impl Rating {
    /// Build a rating engine for `beach`.
    #[must_use]
    pub const fn for_beach(beach: &Beach) -> Self {
        Self::facing(beach.position)
    }

    /// Build a rating engine for a beach facing `position`.
    #[must_use]
    pub const fn facing(position: GeoPosition) -> Self {
        Self {
            beach_position: position,
        }
    }

    /// Rate a forecast point from [`MIN_RATING`] to [`MAX_RATING`].
    #[must_use]
    pub fn rate_point(self, point: &ForecastPoint) -> u8 {
        let swell_position = GeoPosition::from_bearing(point.swell_direction);
        let wind_position = GeoPosition::from_bearing(point.wind_direction);
        let total = self.wind_and_wave_rating(swell_position, wind_position)
            + Self::swell_height_rating(point.swell_height)
            + Self::swell_period_rating(point.swell_period);
        round_thirds(total)
    }

    /// Rate how the wind interacts with the swell at this beach.
    ///
    /// Wind from the same bucket as the swell scores 1, offshore wind scores
    /// 5 and any cross-shore combination scores 3.
    #[must_use]
    pub fn wind_and_wave_rating(self, swell: GeoPosition, wind: GeoPosition) -> u8 {
        if swell == wind {
            return 1;
        }
        if self.is_wind_offshore(swell, wind) {
            return 5;
        }
        3
    }

    /// Swell arrives from the direction the beach faces and the wind blows
    /// from directly behind it.
    fn is_wind_offshore(self, swell: GeoPosition, wind: GeoPosition) -> bool {
        swell == self.beach_position && wind == swell.opposite()
    }

    /// Rate swell height in metres.
    #[must_use]
    pub fn swell_height_rating(height: f64) -> u8 {
        if ANKLE_TO_KNEE.contains(&height) {
            return 2;
        }
        if WAIST_HIGH.contains(&height) {
            return 3;
        }
        if HEAD_HIGH.contains(&height) {
            return 5;
        }
        1
    }

    /// Rate swell period in seconds.
    #[must_use]
    pub fn swell_period_rating(period: f64) -> u8 {
        if SHORT_PERIOD.contains(&period) {
            return 2;
        }
        if MEDIUM_PERIOD.contains(&period) {
            return 4;
        }
        if LONG_PERIOD.contains(&period) {
            return 5;
        }
        1
    }
}

/// Average three sub-ratings, rounding to the nearest integer.
///
/// An integer sum divided by three never lands on `.5`, so adding one before
/// truncating matches half-up rounding.
#[expect(
    clippy::integer_division,
    reason = "the quotient is rounded explicitly by the +1 offset"
)]
const fn round_thirds(total: u8) -> u8 {
    (total + 1) / 3
}
