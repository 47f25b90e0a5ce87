//! Working-hour stepping.
//!
//! Hours are carried as integer milliseconds so that fractional quantities
//! (`0.1h` repeatedly) never drift. The walk consumes, one segment at a
//! time, the smaller of the remaining budget and the time left before the
//! next break; a budget that runs out exactly on a break boundary leaves the
//! result on that boundary (`12:00` or `end:00`).

use chrono::{Duration, NaiveDateTime};
use tracing::trace;
use wt_core::{ensure, Hours, Result, MILLIS_PER_HOUR};
use wt_time::{snap_backward, Calendar, DaySegment, WalkStats};

/// Convert hours to whole milliseconds, rounding to the nearest.
pub fn hours_to_millis(hours: Hours) -> i64 {
    (hours * MILLIS_PER_HOUR as f64).round() as i64
}

/// Convert milliseconds back to hours.
pub fn millis_to_hours(millis: i64) -> Hours {
    millis as f64 / MILLIS_PER_HOUR as f64
}

/// Sum a list of hour terms exactly.
///
/// Every term must be finite and non-negative. An empty list sums to zero.
pub fn sum_hour_terms(terms: &[Hours]) -> Result<Hours> {
    let mut total = 0i64;
    for (i, &term) in terms.iter().enumerate() {
        ensure!(
            term.is_finite() && term >= 0.0,
            "hour term #{} must be a finite non-negative number, got {term}",
            i + 1
        );
        total = total.saturating_add(hours_to_millis(term));
    }
    Ok(millis_to_hours(total))
}

/// Add `hours` working hours to `instant`.
///
/// The start is first snapped backward onto a valid working moment. A
/// non-positive quantity returns `instant` unchanged; a non-finite one is
/// rejected.
pub fn add_working_hours<C: Calendar + ?Sized>(
    instant: NaiveDateTime,
    hours: Hours,
    cal: &C,
    stats: &mut WalkStats,
) -> Result<NaiveDateTime> {
    ensure!(hours.is_finite(), "hours must be finite, got {hours}");
    if hours <= 0.0 {
        return Ok(instant);
    }
    let start = snap_backward(instant, cal)?;
    let result = walk_millis(start, hours_to_millis(hours), cal, stats)?;
    trace!(from = %instant, to = %result, hours, "added working hours");
    Ok(result)
}

/// Consume `remaining` milliseconds of business time starting at `current`.
pub(crate) fn walk_millis<C: Calendar + ?Sized>(
    mut current: NaiveDateTime,
    mut remaining: i64,
    cal: &C,
    stats: &mut WalkStats,
) -> Result<NaiveDateTime> {
    let hours = cal.working_hours();
    while remaining > 0 {
        let date = current.date();
        if !cal.is_working_day(date) {
            current = cal.roll_forward(date, stats)?.and_time(hours.start_time());
            continue;
        }
        match hours.segment(current.time()) {
            DaySegment::BeforeStart => current = date.and_time(hours.start_time()),
            DaySegment::Lunch => current = date.and_time(hours.lunch_end_time()),
            DaySegment::AfterEnd => {
                current = cal
                    .next_working_day(date, stats)?
                    .and_time(hours.start_time());
            }
            segment @ (DaySegment::Morning | DaySegment::Afternoon) => {
                let until_break = hours.millis_until_break(current.time());
                let step = remaining.min(until_break);
                current += Duration::milliseconds(step);
                remaining -= step;
                if remaining > 0 {
                    // The segment is exhausted; resume after the break.
                    current = match segment {
                        DaySegment::Morning => date.and_time(hours.lunch_end_time()),
                        _ => cal
                            .next_working_day(date, stats)?
                            .and_time(hours.start_time()),
                    };
                }
            }
        }
    }
    Ok(current)
}
