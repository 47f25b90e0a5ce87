//! # wt-api
//!
//! The request boundary: query-string validation, response shapes, and a
//! transport-agnostic [`WorkingTimeService`]. Any HTTP framework can sit on
//! top by deserializing a [`CalculationQuery`] and returning the
//! `(status, body)` pair from [`WorkingTimeService::respond`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalculationQuery` → `CalculationRequest`.
pub mod request;

/// Success and error bodies, status mapping.
pub mod response;

/// `WorkingTimeService`.
pub mod service;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use request::{CalculationQuery, CalculationRequest};
pub use response::{http_status, AdvancedResponse, BasicResponse, ErrorResponse};
pub use service::WorkingTimeService;
