//! `WorkingTimeCalculator` — snap, select a method, dispatch, report.
//!
//! Every public entry point funnels into one private `run`, which is the
//! only place the iterative/optimized decision is acted on. Days are always
//! applied before hours.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use tracing::debug;
use wt_core::{DayCount, FastPathSettings, Hours, Result};
use wt_time::{snap, BusinessCalendar, Calendar, WalkStats};

use crate::day_walker::add_working_days;
use crate::fast_path::FastPath;
use crate::hour_walker::{add_working_hours, sum_hour_terms};
use crate::options::{CalculationOptions, Quantity};
use crate::result::{CalculationMethod, WorkingTimeResult};
use crate::strategy::{select_method, select_method_for_terms};

/// Adds business time to local instants under one calendar.
///
/// The calculator borrows its calendar; it holds no mutable state, so one
/// instance may serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct WorkingTimeCalculator<'c> {
    calendar: &'c BusinessCalendar,
    fast_path: FastPathSettings,
}

impl<'c> WorkingTimeCalculator<'c> {
    /// A calculator with default fast-path settings.
    pub fn new(calendar: &'c BusinessCalendar) -> Self {
        Self {
            calendar,
            fast_path: FastPathSettings::default(),
        }
    }

    /// Replace the fast-path settings.
    pub fn with_fast_path(mut self, settings: FastPathSettings) -> Self {
        self.fast_path = settings;
        self
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &BusinessCalendar {
        self.calendar
    }

    /// Snap `start` backward, add `days` working days, then `hours` working
    /// hours. Always iterative.
    pub fn calculate(
        &self,
        start: NaiveDateTime,
        days: DayCount,
        hours: Hours,
    ) -> Result<NaiveDateTime> {
        let quantity = Quantity::new(days, hours);
        quantity.validate()?;
        let result = self.run(
            start,
            days,
            hours,
            CalculationMethod::Iterative,
            &CalculationOptions::default(),
        )?;
        Ok(result.instant)
    }

    /// Add `quantity` under `options`, with bookkeeping.
    pub fn calculate_advanced(
        &self,
        start: NaiveDateTime,
        quantity: &Quantity,
        options: &CalculationOptions,
    ) -> Result<WorkingTimeResult> {
        quantity.validate()?;
        let method = select_method(quantity.days, quantity.hours, options, &self.fast_path);
        self.run(start, quantity.days, quantity.hours, method, options)
    }

    /// Add `days` working days plus the sum of several hour terms.
    pub fn calculate_with_hour_terms(
        &self,
        start: NaiveDateTime,
        days: DayCount,
        hour_terms: &[Hours],
        options: &CalculationOptions,
    ) -> Result<WorkingTimeResult> {
        let hours = sum_hour_terms(hour_terms)?;
        let method =
            select_method_for_terms(days, hour_terms.len(), hours, options, &self.fast_path);
        self.run(start, days, hours, method, options)
    }

    /// Add the sum of several hour terms.
    pub fn add_multiple_working_hours(
        &self,
        start: NaiveDateTime,
        hour_terms: &[Hours],
        options: &CalculationOptions,
    ) -> Result<WorkingTimeResult> {
        self.calculate_with_hour_terms(start, 0, hour_terms, options)
    }

    /// Add `hours` through the fast path regardless of size.
    pub fn add_working_hours_optimized(
        &self,
        start: NaiveDateTime,
        hours: Hours,
        options: &CalculationOptions,
    ) -> Result<WorkingTimeResult> {
        Quantity::hours(hours).validate()?;
        self.run(start, 0, hours, CalculationMethod::Optimized, options)
    }

    /// Snap, then add through `method`.
    ///
    /// A `weekend_policy` override replaces the calendar's policy for the
    /// whole call: the snap, both walkers and the fast path's week charge all
    /// see the overridden week. An older Mon–Fri-only snap and an optimized
    /// path that ignored the override are not reproduced.
    fn run(
        &self,
        start: NaiveDateTime,
        days: DayCount,
        hours: Hours,
        method: CalculationMethod,
        options: &CalculationOptions,
    ) -> Result<WorkingTimeResult> {
        let calendar: Cow<'_, BusinessCalendar> = match options.weekend_policy {
            Some(policy) if policy != self.calendar.weekend_policy() => {
                Cow::Owned(self.calendar.with_weekend_policy(policy))
            }
            _ => Cow::Borrowed(self.calendar),
        };
        let cal: &BusinessCalendar = &calendar;

        let mut stats = WalkStats::default();
        let snapped = snap(start, options.snap_direction(), cal, &mut stats)?;
        debug!(
            calendar = cal.name(),
            %start,
            %snapped,
            days,
            hours,
            %method,
            "calculating working time"
        );

        let instant = match method {
            CalculationMethod::Optimized => {
                let fast_path = FastPath::from_settings(&self.fast_path);
                fast_path.add(snapped, days, hours, cal, &mut stats)?
            }
            CalculationMethod::Iterative => {
                let after_days = add_working_days(snapped, days, cal, &mut stats)?;
                add_working_hours(after_days, hours, cal, &mut stats)?
            }
        };

        Ok(WorkingTimeResult {
            instant,
            working_days_added: days,
            working_hours_added: hours,
            weekends_skipped: stats.weekends_skipped,
            holidays_skipped: stats.holidays_skipped,
            method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wt_core::Error;
    use wt_time::{HolidaySet, WeekendPolicy};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn cal() -> BusinessCalendar {
        BusinessCalendar::new(HolidaySet::parse(["2025-11-03", "2025-11-17"]).unwrap())
    }

    #[test]
    fn basic_contract_is_days_then_hours() {
        let cal = cal();
        let calc = WorkingTimeCalculator::new(&cal);
        // Fri 16:00 + 1 day → Tue 16:00, + 2h → Wed 09:00.
        let r = calc.calculate(at(2025, 10, 31, 16, 0), 1, 2.0).unwrap();
        assert_eq!(r, at(2025, 11, 5, 9, 0));
    }

    #[test]
    fn zero_quantity_on_valid_instant_is_identity() {
        let cal = cal();
        let calc = WorkingTimeCalculator::new(&cal);
        let t = at(2025, 10, 30, 10, 45);
        assert_eq!(calc.calculate(t, 0, 0.0).unwrap(), t);
    }

    #[test]
    fn negative_hours_are_invalid() {
        let cal = cal();
        let calc = WorkingTimeCalculator::new(&cal);
        let err = calc.calculate(at(2025, 10, 30, 10, 0), 0, -1.0).unwrap_err();
        assert!(err.is_client_error());
        let err = calc
            .add_multiple_working_hours(
                at(2025, 10, 30, 10, 0),
                &[1.0, f64::NAN],
                &CalculationOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn advanced_reports_skips_and_method() {
        let cal = cal();
        let calc = WorkingTimeCalculator::new(&cal);
        let r = calc
            .calculate_advanced(
                at(2025, 10, 31, 15, 0),
                &Quantity::days(1),
                &CalculationOptions::default(),
            )
            .unwrap();
        assert_eq!(r.instant, at(2025, 11, 4, 15, 0));
        assert_eq!(r.weekends_skipped, 2);
        assert_eq!(r.holidays_skipped, 1);
        assert_eq!(r.method, CalculationMethod::Iterative);
        assert_eq!(r.working_days_added, 1);
    }

    #[test]
    fn weekend_override_applies_to_snap_and_walk() {
        let cal = cal();
        let calc = WorkingTimeCalculator::new(&cal);
        let opts = CalculationOptions::default().with_weekend_policy(WeekendPolicy::MON_SAT);
        // Saturday 10:00 is valid under Mon–Sat: +3h → Sat 14:00.
        let r = calc
            .calculate_advanced(at(2025, 11, 1, 10, 0), &Quantity::hours(3.0), &opts)
            .unwrap();
        assert_eq!(r.instant, at(2025, 11, 1, 14, 0));
        assert_eq!(r.weekends_skipped, 0);
    }

    #[test]
    fn large_optimized_request_uses_fast_path() {
        let cal = cal();
        let calc = WorkingTimeCalculator::new(&cal);
        let opts = CalculationOptions::default().optimize(true);
        let r = calc
            .calculate_advanced(at(2025, 10, 30, 8, 0), &Quantity::days(31), &opts)
            .unwrap();
        assert_eq!(r.method, CalculationMethod::Optimized);

        let disabled = calc.clone().with_fast_path(FastPathSettings {
            enabled: false,
            ..FastPathSettings::default()
        });
        let r = disabled
            .calculate_advanced(at(2025, 10, 30, 8, 0), &Quantity::days(31), &opts)
            .unwrap();
        assert_eq!(r.method, CalculationMethod::Iterative);
    }
}
