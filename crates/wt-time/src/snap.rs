//! Instant snapping.
//!
//! Moves an arbitrary local instant onto a valid working moment, either
//! backward ("round down to the last valid working moment") or forward
//! ("approximate to the next working moment"). Day validity is always
//! resolved before hour validity; the hour adjustment only re-walks days in
//! the backward before-start case and the forward after-end case.
//!
//! Only forward snaps record skipped days in [`WalkStats`]; a backward snap
//! moves against the walk and crosses nothing the result has to account for.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;
use wt_core::Result;

use crate::calendar::Calendar;
use crate::stats::WalkStats;
use crate::working_hours::DaySegment;

/// Direction in which an off-hours instant is snapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapDirection {
    /// Round down to the last valid working moment.
    #[default]
    Backward,
    /// Approximate to the next valid working moment.
    Forward,
}

impl SnapDirection {
    /// `Forward` when approximating to the next working moment.
    pub fn from_approximate_to_next(approximate_to_next: bool) -> Self {
        if approximate_to_next {
            SnapDirection::Forward
        } else {
            SnapDirection::Backward
        }
    }
}

/// Snap `instant` in `direction`.
pub fn snap<C: Calendar + ?Sized>(
    instant: NaiveDateTime,
    direction: SnapDirection,
    cal: &C,
    stats: &mut WalkStats,
) -> Result<NaiveDateTime> {
    match direction {
        SnapDirection::Backward => snap_backward(instant, cal),
        SnapDirection::Forward => snap_forward(instant, cal, stats),
    }
}

/// Round `instant` down to the last valid working moment.
///
/// * non-working day: step back to the previous working day (time kept);
/// * before `start`: previous working day at `end-1:59:59`;
/// * at or after `end`: same day at `end-1:59:59`;
/// * during lunch: same day at `lunch_start-1:59:59`.
pub fn snap_backward<C: Calendar + ?Sized>(
    instant: NaiveDateTime,
    cal: &C,
) -> Result<NaiveDateTime> {
    let hours = cal.working_hours();
    let mut stats = WalkStats::default();
    let day = cal.roll_backward(instant.date(), &mut stats)?;
    let time = instant.time();

    let snapped = match hours.segment(time) {
        DaySegment::BeforeStart => cal
            .previous_working_day(day, &mut stats)?
            .and_time(hours.last_afternoon_second()),
        DaySegment::AfterEnd => day.and_time(hours.last_afternoon_second()),
        DaySegment::Lunch => day.and_time(hours.last_morning_second()),
        DaySegment::Morning | DaySegment::Afternoon => day.and_time(time),
    };
    if snapped != instant {
        trace!(from = %instant, to = %snapped, "snapped backward");
    }
    Ok(snapped)
}

/// Move `instant` forward to the next valid working moment.
///
/// * non-working day: step forward to the next working day (time kept);
/// * before `start`: same day at `start:00:00`;
/// * during lunch: same day at `lunch_end:00:00`;
/// * at or after `end`: next working day at `start:00:00`.
pub fn snap_forward<C: Calendar + ?Sized>(
    instant: NaiveDateTime,
    cal: &C,
    stats: &mut WalkStats,
) -> Result<NaiveDateTime> {
    let hours = cal.working_hours();
    let day = cal.roll_forward(instant.date(), stats)?;
    let time = instant.time();

    let snapped = match hours.segment(time) {
        DaySegment::BeforeStart => day.and_time(hours.start_time()),
        DaySegment::Lunch => day.and_time(hours.lunch_end_time()),
        DaySegment::AfterEnd => cal
            .next_working_day(day, stats)?
            .and_time(hours.start_time()),
        DaySegment::Morning | DaySegment::Afternoon => day.and_time(time),
    };
    if snapped != instant {
        trace!(from = %instant, to = %snapped, "snapped forward");
    }
    Ok(snapped)
}
