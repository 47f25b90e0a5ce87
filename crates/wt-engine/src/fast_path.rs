//! Week-skipping fast path.
//!
//! For large quantities the walk first jumps whole calendar weeks. The
//! number of weeks comes from an estimate of the calendar span:
//!
//! ```text
//! span_days = ceil(total_hours / daily_hours × 7 / working_days_per_week)
//! weeks     = floor(span_days / 7)      when span_days > min_skip_calendar_days
//! ```
//!
//! and each skipped week is charged `working_days_per_week × daily_hours`.
//! The remainder goes through the exact hour walker. The jump does not
//! consult the holiday set, so a result may differ from the exact walk by
//! the number of holidays inside the skipped weeks.
//!
//! The week count is also capped at the number of full weeks the budget
//! pays for, so the jump never overshoots. On a holiday-free calendar the
//! result is the same point in business time as the exact walk, but not
//! always the same clock reading. When the budget runs out on a break, one
//! strategy can stop at `lunch_start:00` or `end:00` while the other reads
//! the equivalent `lunch_end:00` or the next working day's `start:00`
//! (for example `17:00` against `08:00` the following morning).

use chrono::{Duration, NaiveDateTime};
use tracing::debug;
use wt_core::{ensure, fail, DayCount, FastPathSettings, Hours, Result};
use wt_time::{snap_backward, Calendar, WalkStats};

use crate::hour_walker::{hours_to_millis, millis_to_hours, walk_millis};

/// Whole weeks to jump and the business time they account for.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockSkip {
    /// Calendar weeks to jump.
    pub weeks: u32,
    /// Business hours charged for the jump.
    pub hours_covered: Hours,
}

impl BlockSkip {
    /// No jump.
    pub const NONE: BlockSkip = BlockSkip {
        weeks: 0,
        hours_covered: 0.0,
    };
}

/// The week-skipping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastPath {
    min_skip_calendar_days: u32,
}

impl Default for FastPath {
    fn default() -> Self {
        Self::new(FastPathSettings::default().min_skip_calendar_days)
    }
}

impl FastPath {
    /// Skip weeks only when the estimated span exceeds `min_skip_calendar_days`.
    pub fn new(min_skip_calendar_days: u32) -> Self {
        Self {
            min_skip_calendar_days,
        }
    }

    /// Build from the `[fast_path]` settings table.
    pub fn from_settings(settings: &FastPathSettings) -> Self {
        Self::new(settings.min_skip_calendar_days)
    }

    /// Plan the jump for `total_hours` of business time under `cal`.
    pub fn plan<C: Calendar + ?Sized>(&self, total_hours: Hours, cal: &C) -> BlockSkip {
        let total_ms = hours_to_millis(total_hours);
        let (weeks, covered_ms) = self.plan_millis(total_ms, cal);
        BlockSkip {
            weeks,
            hours_covered: millis_to_hours(covered_ms),
        }
    }

    fn plan_millis<C: Calendar + ?Sized>(&self, total_ms: i64, cal: &C) -> (u32, i64) {
        let daily_ms = hours_to_millis(cal.working_hours().daily_hours());
        let per_week = cal.weekend_policy().working_days_per_week() as i64;
        if total_ms <= 0 || daily_ms <= 0 {
            return (0, 0);
        }
        let working_days = total_ms as f64 / daily_ms as f64;
        let span_days = (working_days * 7.0 / per_week as f64).ceil();
        if span_days <= self.min_skip_calendar_days as f64 {
            return (0, 0);
        }
        let week_ms = per_week * daily_ms;
        let estimated = (span_days / 7.0).floor() as i64;
        let affordable = total_ms / week_ms;
        let weeks = estimated.min(affordable).clamp(0, u32::MAX as i64);
        (weeks as u32, weeks * week_ms)
    }

    /// Add `days` working days and `hours` working hours as one budget of
    /// business time.
    ///
    /// `instant` is snapped backward first, exactly like the hour walker.
    /// Weekend days inside the skipped weeks are added to `stats`. A jump
    /// past the last representable date fails with `Error::Internal`.
    pub fn add<C: Calendar + ?Sized>(
        &self,
        instant: NaiveDateTime,
        days: DayCount,
        hours: Hours,
        cal: &C,
        stats: &mut WalkStats,
    ) -> Result<NaiveDateTime> {
        ensure!(
            hours.is_finite() && hours >= 0.0,
            "hours must be a finite non-negative number, got {hours}"
        );
        let daily_ms = hours_to_millis(cal.working_hours().daily_hours());
        let total_ms = (days as i64)
            .saturating_mul(daily_ms)
            .saturating_add(hours_to_millis(hours));
        if total_ms == 0 {
            return Ok(instant);
        }

        let start = snap_backward(instant, cal)?;
        let (weeks, covered_ms) = self.plan_millis(total_ms, cal);
        let Some(jumped) = Duration::try_weeks(weeks as i64)
            .and_then(|jump| start.checked_add_signed(jump))
        else {
            fail!("skipping {weeks} weeks from {start} leaves the supported date range");
        };
        let non_working_per_week = 7 - cal.weekend_policy().working_days_per_week();
        stats.weekends_skipped = stats
            .weekends_skipped
            .saturating_add(weeks.saturating_mul(non_working_per_week));
        debug!(
            %start,
            weeks,
            covered_hours = millis_to_hours(covered_ms),
            remaining_hours = millis_to_hours(total_ms - covered_ms),
            "fast path week skip"
        );
        walk_millis(jumped, total_ms - covered_ms, cal, stats)
    }

    /// Add `hours` working hours with a week skip.
    pub fn add_working_hours<C: Calendar + ?Sized>(
        &self,
        instant: NaiveDateTime,
        hours: Hours,
        cal: &C,
        stats: &mut WalkStats,
    ) -> Result<NaiveDateTime> {
        self.add(instant, 0, hours, cal, stats)
    }
}
