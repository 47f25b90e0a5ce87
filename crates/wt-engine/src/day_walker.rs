//! Whole-working-day stepping.
//!
//! Each added day advances the date one calendar day at a time until a
//! working day is reached; the clock time is carried through unchanged. A
//! run of non-working days longer than the calendar's lookahead limit is an
//! error rather than an endless scan.

use chrono::NaiveDateTime;
use tracing::trace;
use wt_core::{DayCount, Result};
use wt_time::{Calendar, WalkStats};

/// Add `days` working days to `instant`, keeping its time of day.
///
/// `days == 0` returns `instant` unchanged. Non-working days crossed are
/// recorded in `stats`.
pub fn add_working_days<C: Calendar + ?Sized>(
    instant: NaiveDateTime,
    days: DayCount,
    cal: &C,
    stats: &mut WalkStats,
) -> Result<NaiveDateTime> {
    let mut date = instant.date();
    for _ in 0..days {
        date = cal.next_working_day(date, stats)?;
    }
    let result = date.and_time(instant.time());
    if days > 0 {
        trace!(from = %instant, to = %result, days, "added working days");
    }
    Ok(result)
}
