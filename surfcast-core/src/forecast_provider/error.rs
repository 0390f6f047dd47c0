use thiserror::Error;

/// Errors from [`crate::forecast_provider::ForecastProvider::fetch_points`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastProviderError {
    /// The request never reached the provider or no response came back.
    ///
    /// Covers connection failures and timeouts.
    #[error("unexpected error when trying to communicate to the forecast provider: {message}")]
    Request {
        /// Transport error message.
        message: String,
    },
    /// The provider answered with a non-success status.
    #[error("unexpected error returned by the forecast provider: Error: {payload} Code: {status}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        payload: String,
    },
    /// A success response carried a body that could not be decoded.
    #[error("forecast provider returned a malformed response: {message}")]
    MalformedResponse {
        /// Decoder error message.
        message: String,
    },
}

impl ForecastProviderError {
    /// HTTP status attached to a [`ForecastProviderError::Response`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Request { .. } | Self::MalformedResponse { .. } => None,
        }
    }
}
