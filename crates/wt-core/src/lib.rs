//! # wt-core
//!
//! Core types, error definitions, and settings for worktime-rs.
//!
//! This crate provides the building blocks shared across all other crates in
//! the workspace – type aliases, the error taxonomy with its `ensure!` /
//! `fail!` macros, and [`EngineSettings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Engine settings (working window, zone offset, fast-path thresholds).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A quantity of business hours. Fractional values are allowed.
pub type Hours = f64;

/// A count of whole business days.
pub type DayCount = u32;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{
    EngineSettings, FastPathSettings, HolidaySettings, WorkingHoursSettings,
};
