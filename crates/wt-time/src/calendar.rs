//! `Calendar` trait and the concrete [`BusinessCalendar`].
//!
//! A calendar knows which civil dates are working days and which hours of a
//! working day are business hours. Day stepping (`roll_*`, `*_working_day`)
//! lives here as provided methods, so every walker shares the same bounded
//! scan and the same skip accounting.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use wt_core::{EngineSettings, Error, Result};

use crate::holiday_set::HolidaySet;
use crate::stats::WalkStats;
use crate::weekend_policy::WeekendPolicy;
use crate::working_hours::WorkingHours;

/// Default bound on consecutive non-working days scanned by one roll.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 366;

/// What kind of day a civil date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// A working day.
    Working,
    /// A weekday the weekend policy excludes.
    Weekend,
    /// A holiday falling on an otherwise-working weekday.
    Holiday,
}

/// A business calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// The daily working window.
    fn working_hours(&self) -> &WorkingHours;

    /// Which weekend days count as working days.
    fn weekend_policy(&self) -> WeekendPolicy;

    /// Return `true` if `date` is in the holiday set.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Maximum consecutive non-working days one roll may scan.
    fn lookahead_limit(&self) -> u32 {
        DEFAULT_LOOKAHEAD_DAYS
    }

    /// Classify `date`. A holiday on a weekend day counts as a weekend.
    fn classify(&self, date: NaiveDate) -> DayKind {
        if !self.weekend_policy().is_working_weekday(date.weekday()) {
            DayKind::Weekend
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else {
            DayKind::Working
        }
    }

    /// Return `true` if `date` is a working day.
    fn is_working_day(&self, date: NaiveDate) -> bool {
        self.classify(date) == DayKind::Working
    }

    /// Return `true` if the hour of `instant` is a business hour.
    fn is_working_hour(&self, instant: NaiveDateTime) -> bool {
        self.working_hours().is_working_hour(instant.hour())
    }

    /// Return `true` if `instant` is on a working day during business hours.
    fn is_working_instant(&self, instant: NaiveDateTime) -> bool {
        self.is_working_day(instant.date()) && self.is_working_hour(instant)
    }

    /// `date` if it is a working day, else the first working day after it.
    fn roll_forward(&self, date: NaiveDate, stats: &mut WalkStats) -> Result<NaiveDate> {
        scan(self, date, Direction::Forward, stats)
    }

    /// `date` if it is a working day, else the last working day before it.
    fn roll_backward(&self, date: NaiveDate, stats: &mut WalkStats) -> Result<NaiveDate> {
        scan(self, date, Direction::Backward, stats)
    }

    /// The first working day strictly after `date`.
    fn next_working_day(&self, date: NaiveDate, stats: &mut WalkStats) -> Result<NaiveDate> {
        self.roll_forward(step(date, Direction::Forward)?, stats)
    }

    /// The last working day strictly before `date`.
    fn previous_working_day(&self, date: NaiveDate, stats: &mut WalkStats) -> Result<NaiveDate> {
        self.roll_backward(step(date, Direction::Backward)?, stats)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Advance `date` by one calendar day in `dir`.
fn step(date: NaiveDate, dir: Direction) -> Result<NaiveDate> {
    let next = match dir {
        Direction::Forward => date.succ_opt(),
        Direction::Backward => date.pred_opt(),
    };
    next.ok_or_else(|| Error::Internal(format!("date arithmetic overflow at {date}")))
}

fn scan<C: Calendar + ?Sized>(
    cal: &C,
    mut date: NaiveDate,
    dir: Direction,
    stats: &mut WalkStats,
) -> Result<NaiveDate> {
    let from = date;
    let limit = cal.lookahead_limit();
    let mut scanned = 0u32;
    loop {
        let kind = cal.classify(date);
        if kind == DayKind::Working {
            return Ok(date);
        }
        if scanned >= limit {
            return Err(Error::LookaheadExceeded {
                from: from.to_string(),
                limit,
            });
        }
        stats.record(kind);
        scanned += 1;
        date = step(date, dir)?;
    }
}

/// Working window + holiday snapshot + weekend policy.
///
/// Built once per request (or once per process) and shared by reference;
/// cloning only bumps the holiday snapshot's reference count.
#[derive(Debug, Clone)]
pub struct BusinessCalendar {
    name: String,
    hours: WorkingHours,
    holidays: HolidaySet,
    weekend: WeekendPolicy,
    lookahead_limit: u32,
}

impl BusinessCalendar {
    /// A Monday–Friday calendar with the default window and the given holidays.
    pub fn new(holidays: HolidaySet) -> Self {
        Self {
            name: "Colombia".into(),
            hours: WorkingHours::DEFAULT,
            holidays,
            weekend: WeekendPolicy::MON_FRI,
            lookahead_limit: DEFAULT_LOOKAHEAD_DAYS,
        }
    }

    /// Build from engine settings.
    pub fn from_settings(settings: &EngineSettings, holidays: HolidaySet) -> Result<Self> {
        Ok(Self::new(holidays)
            .with_working_hours(WorkingHours::from_settings(&settings.working_hours)?)
            .with_lookahead_limit(settings.lookahead_limit_days))
    }

    /// Replace the working window.
    pub fn with_working_hours(mut self, hours: WorkingHours) -> Self {
        self.hours = hours;
        self
    }

    /// Replace the lookahead bound. Zero is clamped to one.
    pub fn with_lookahead_limit(mut self, days: u32) -> Self {
        self.lookahead_limit = days.max(1);
        self
    }

    /// A calendar sharing this holiday snapshot under a different weekend policy.
    pub fn with_weekend_policy(&self, weekend: WeekendPolicy) -> Self {
        Self {
            weekend,
            ..self.clone()
        }
    }

    /// The holiday snapshot.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl Calendar for BusinessCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn working_hours(&self) -> &WorkingHours {
        &self.hours
    }

    fn weekend_policy(&self) -> WeekendPolicy {
        self.weekend
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn lookahead_limit(&self) -> u32 {
        self.lookahead_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn colombia_nov_2025() -> BusinessCalendar {
        // 2025-11-03 (Mon) and 2025-11-17 (Mon) are holidays.
        BusinessCalendar::new(HolidaySet::parse(["2025-11-03", "2025-11-17"]).unwrap())
    }

    #[test]
    fn weekend_and_holiday_classification() {
        let cal = colombia_nov_2025();
        assert_eq!(cal.classify(date(2025, 11, 1)), DayKind::Weekend);
        assert_eq!(cal.classify(date(2025, 11, 2)), DayKind::Weekend);
        assert_eq!(cal.classify(date(2025, 11, 3)), DayKind::Holiday);
        assert_eq!(cal.classify(date(2025, 11, 4)), DayKind::Working);
        assert!(!cal.is_working_day(date(2025, 11, 3)));
    }

    #[test]
    fn weekend_policy_override_shares_holidays() {
        let cal = colombia_nov_2025();
        let sat = cal.with_weekend_policy(WeekendPolicy::MON_SAT);
        assert!(sat.is_working_day(date(2025, 11, 1)));
        assert!(!sat.is_working_day(date(2025, 11, 2)));
        assert!(!sat.is_working_day(date(2025, 11, 3)));
        assert!(sat.holidays().shares_snapshot(cal.holidays()));
        assert_eq!(sat.name(), cal.name());
        assert_eq!(cal.name(), "Colombia");
    }

    #[test]
    fn roll_forward_counts_skips() {
        let cal = colombia_nov_2025();
        let mut stats = WalkStats::default();
        let d = cal.roll_forward(date(2025, 11, 1), &mut stats).unwrap();
        assert_eq!(d, date(2025, 11, 4));
        assert_eq!(stats.weekends_skipped, 2);
        assert_eq!(stats.holidays_skipped, 1);
    }

    #[test]
    fn roll_backward_stays_on_working_day() {
        let cal = colombia_nov_2025();
        let mut stats = WalkStats::default();
        let d = cal.roll_backward(date(2025, 11, 3), &mut stats).unwrap();
        assert_eq!(d, date(2025, 10, 31));
        assert_eq!(stats.total(), 3);

        let mut stats = WalkStats::default();
        assert_eq!(
            cal.roll_backward(date(2025, 11, 4), &mut stats).unwrap(),
            date(2025, 11, 4)
        );
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn next_and_previous_are_strict() {
        let cal = colombia_nov_2025();
        let mut stats = WalkStats::default();
        assert_eq!(
            cal.next_working_day(date(2025, 10, 31), &mut stats).unwrap(),
            date(2025, 11, 4)
        );
        assert_eq!(
            cal.previous_working_day(date(2025, 11, 4), &mut stats).unwrap(),
            date(2025, 10, 31)
        );
    }

    #[test]
    fn lookahead_guard_trips_on_solid_holiday_block() {
        let start = date(2025, 1, 1);
        let holidays = HolidaySet::from_dates(start.iter_days().take(60));
        let cal = BusinessCalendar::new(holidays).with_lookahead_limit(30);
        let mut stats = WalkStats::default();
        let err = cal.roll_forward(start, &mut stats).unwrap_err();
        assert_eq!(
            err,
            Error::LookaheadExceeded {
                from: "2025-01-01".into(),
                limit: 30
            }
        );
    }

    #[test]
    fn settings_window_is_applied() {
        let mut settings = EngineSettings::default();
        settings.working_hours.start = 7;
        settings.lookahead_limit_days = 10;
        let cal = BusinessCalendar::from_settings(&settings, HolidaySet::empty()).unwrap();
        assert_eq!(cal.working_hours().start(), 7);
        assert_eq!(cal.lookahead_limit(), 10);
    }
}
