//! # wt-engine
//!
//! Business-time arithmetic on top of a [`wt_time::Calendar`]:
//!
//! - [`day_walker`] — add whole working days, preserving the clock time
//! - [`hour_walker`] — add (fractional) working hours, respecting lunch and
//!   day boundaries
//! - [`fast_path`] — skip whole weeks before handing the remainder to the
//!   hour walker
//! - [`strategy`] — pick iterative or optimized for a request
//! - [`orchestrator`] — snap, dispatch, and report a [`WorkingTimeResult`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Whole-working-day stepping.
pub mod day_walker;

/// Week-skipping estimate for large quantities.
pub mod fast_path;

/// Working-hour stepping.
pub mod hour_walker;

/// Per-request options.
pub mod options;

/// `WorkingTimeCalculator` — the entry point.
pub mod orchestrator;

/// `WorkingTimeResult` and `CalculationMethod`.
pub mod result;

/// Iterative vs. optimized selection.
pub mod strategy;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use day_walker::add_working_days;
pub use fast_path::{BlockSkip, FastPath};
pub use hour_walker::{add_working_hours, hours_to_millis, millis_to_hours, sum_hour_terms};
pub use options::{CalculationOptions, Quantity};
pub use orchestrator::WorkingTimeCalculator;
pub use result::{CalculationMethod, WorkingTimeResult};
pub use strategy::{select_method, select_method_for_terms};
