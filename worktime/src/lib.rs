//! # worktime
//!
//! Business-time arithmetic for a Colombian office calendar: add working
//! days and working hours to an instant, skipping weekends, holidays, the
//! lunch break, and off-hours.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! worktime = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use worktime::engine::WorkingTimeCalculator;
//! use worktime::time::{BusinessCalendar, HolidaySet};
//!
//! let calendar = BusinessCalendar::new(HolidaySet::parse(["2025-11-03"]).unwrap());
//! let calc = WorkingTimeCalculator::new(&calendar);
//!
//! // Friday 15:00 + 1 working day + 3 working hours
//! let start = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap().and_hms_opt(15, 0, 0).unwrap();
//! let due = calc.calculate(start, 1, 3.0).unwrap();
//! assert_eq!(due, NaiveDate::from_ymd_opt(2025, 11, 5).unwrap().and_hms_opt(9, 0, 0).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, error definitions, and settings.
pub use wt_core as core;

/// Working window, weekend policy, holidays, calendar, zone, and snapping.
pub use wt_time as time;

/// Walkers, fast path, strategy selection, and the calculator.
pub use wt_engine as engine;

/// Holiday sources, Colombian rules, and the cached provider.
pub use wt_holidays as holidays;

/// Request validation, responses, and the service.
pub use wt_api as api;
