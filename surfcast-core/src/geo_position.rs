//! Cardinal buckets for compass bearings.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

const EAST: Range<f64> = 50.0..120.0;
const SOUTH: Range<f64> = 120.0..220.0;
const WEST: Range<f64> = 220.0..310.0;
const NORTH_WRAP_START: f64 = 310.0;
const NORTH_BEFORE_EAST: Range<f64> = 0.0..50.0;

/// One of the four coarse compass directions.
///
/// Used both for the direction a beach faces and for the direction swell or
/// wind arrives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeoPosition {
    /// North.
    N,
    /// East.
    E,
    /// South.
    S,
    /// West.
    W,
}

impl GeoPosition {
    /// Bucket a bearing in degrees into a cardinal direction.
    ///
    /// Ranges are half-open and checked in this order: `>= 310` or
    /// `[0, 50)` is north, `[50, 120)` east, `[120, 220)` south and
    /// `[220, 310)` west.
    ///
    /// Values matching no range (negative bearings, `NaN`) fall back to
    /// [`GeoPosition::E`]. The fallback is kept as-is rather than wrapping
    /// negative bearings around the compass.
    ///
    /// # Examples
    ///
    /// ```
    /// use surfcast_core::GeoPosition;
    ///
    /// assert_eq!(GeoPosition::from_bearing(0.0), GeoPosition::N);
    /// assert_eq!(GeoPosition::from_bearing(120.0), GeoPosition::S);
    /// assert_eq!(GeoPosition::from_bearing(-10.0), GeoPosition::E);
    /// ```
    #[must_use]
    pub fn from_bearing(degrees: f64) -> Self {
        if degrees >= NORTH_WRAP_START || NORTH_BEFORE_EAST.contains(&degrees) {
            return Self::N;
        }
        if EAST.contains(&degrees) {
            return Self::E;
        }
        if SOUTH.contains(&degrees) {
            return Self::S;
        }
        if WEST.contains(&degrees) {
            return Self::W;
        }
        Self::E
    }

    /// Return the direction on the other side of the compass.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::E => Self::W,
            Self::S => Self::N,
            Self::W => Self::E,
        }
    }

    /// Single-letter code used in serialized payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::E => "E",
            Self::S => "S",
            Self::W => "W",
        }
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`GeoPosition`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cardinal direction {input:?} (expected one of N, E, S, W)")]
pub struct ParseGeoPositionError {
    /// Text that failed to parse.
    pub input: String,
}

impl FromStr for GeoPosition {
    type Err = ParseGeoPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Self::N),
            "E" => Ok(Self::E),
            "S" => Ok(Self::S),
            "W" => Ok(Self::W),
            _ => Err(ParseGeoPositionError {
                input: s.to_owned(),
            }),
        }
    }
}
