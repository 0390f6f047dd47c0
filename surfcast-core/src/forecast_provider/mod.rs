//! Fetch normalized forecast points from a marine-data provider.
//!
//! The `ForecastProvider` trait abstracts the one network dependency of the
//! engine. Callers supply a coordinate and receive the provider's complete
//! samples, already normalized into [`ForecastPoint`](crate::ForecastPoint)
//! values.
//!
//! Transport failures and provider error responses are reported as distinct
//! [`ForecastProviderError`] variants so callers can branch on the kind.

mod error;
mod provider;

pub use error::ForecastProviderError;
pub use provider::ForecastProvider;
