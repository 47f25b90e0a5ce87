//! # wt-time
//!
//! Working window, weekend policy, holiday set, business calendar, civil
//! zone, and instant snapping.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and [`BusinessCalendar`].
pub mod calendar;

/// `HolidaySet` — exact `YYYY-MM-DD` holiday membership.
pub mod holiday_set;

/// Backward / forward snapping onto valid working moments.
pub mod snap;

/// `WalkStats` — skipped weekend and holiday counters.
pub mod stats;

/// `WeekendPolicy` — Saturday / Sunday inclusion.
pub mod weekend_policy;

/// `WorkingHours` — start, lunch, and end boundaries.
pub mod working_hours;

/// `CivilZone` — fixed-offset local time.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{BusinessCalendar, Calendar, DayKind, DEFAULT_LOOKAHEAD_DAYS};
pub use holiday_set::{holiday_key, HolidaySet};
pub use snap::{snap, snap_backward, snap_forward, SnapDirection};
pub use stats::WalkStats;
pub use weekend_policy::WeekendPolicy;
pub use working_hours::{DaySegment, WorkingHours};
pub use zone::{format_utc, CivilZone};
