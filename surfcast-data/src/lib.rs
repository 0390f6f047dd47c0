//! Provider adapters for the Surfcast engine.
//!
//! Responsibilities:
//! - Implement [`surfcast_core::ForecastProvider`] for marine-data services.
//! - Encapsulate each service's wire format and map it onto
//!   [`surfcast_core::ForecastPoint`].
//!
//! Boundaries:
//! - Do not encode rating rules (live in `surfcast-core`).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod stormglass;
