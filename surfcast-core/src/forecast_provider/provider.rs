//! Forecast provider trait.

use crate::ForecastPoint;

use super::error::ForecastProviderError;

/// Fetch normalized forecast points for a coordinate.
///
/// Implementations must:
/// - drop samples missing any field of [`ForecastPoint`] instead of failing,
/// - return points in the provider's order (time ascending),
/// - report transport failures as [`ForecastProviderError::Request`] and
///   non-success responses as [`ForecastProviderError::Response`].
///
/// # Examples
///
/// ```rust
/// use surfcast_core::{ForecastPoint, ForecastProvider, ForecastProviderError};
///
/// struct CalmSeas;
///
/// impl ForecastProvider for CalmSeas {
///     fn fetch_points(
///         &self,
///         _lat: f64,
///         _lng: f64,
///     ) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let points = CalmSeas.fetch_points(-33.79, 151.28)?;
/// assert!(points.is_empty());
/// # Ok::<(), ForecastProviderError>(())
/// ```
pub trait ForecastProvider {
    /// Return the complete forecast points for `lat`/`lng`.
    fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>, ForecastProviderError>;
}

impl<P: ForecastProvider + ?Sized> ForecastProvider for &P {
    fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
        (**self).fetch_points(lat, lng)
    }
}

impl<P: ForecastProvider + ?Sized> ForecastProvider for Box<P> {
    fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>, ForecastProviderError> {
        (**self).fetch_points(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::{StubForecastProvider, sample_points};

    #[rstest]
    fn stub_returns_configured_points() {
        let provider = StubForecastProvider::with_points(sample_points());
        let points = provider
            .fetch_points(-33.79, 151.28)
            .expect("stub should return points");
        assert_eq!(points, sample_points());
    }

    #[rstest]
    fn boxed_provider_delegates() {
        let provider: Box<dyn ForecastProvider> =
            Box::new(StubForecastProvider::with_error(ForecastProviderError::Request {
                message: "Network Error".to_owned(),
            }));
        let err = provider
            .fetch_points(0.0, 0.0)
            .expect_err("stub should fail");
        assert!(matches!(err, ForecastProviderError::Request { .. }));
    }
}
