//! Rule-based Colombian holidays against published lists.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use wt_holidays::colombia::{easter_sunday, holidays, weekday_holidays};
use wt_holidays::{HolidayOrigin, HolidayProvider, StaticSource};
use wt_time::{holiday_key, Calendar, WalkStats};

const HOLIDAYS_2025: [&str; 16] = [
    "2025-01-01", "2025-01-06", "2025-03-24", "2025-04-17", "2025-04-18", "2025-05-01",
    "2025-06-02", "2025-06-23", "2025-06-30", "2025-08-07", "2025-08-18", "2025-10-13",
    "2025-11-03", "2025-11-17", "2025-12-08", "2025-12-25",
];

const HOLIDAYS_2026: [&str; 18] = [
    "2026-01-01", "2026-01-12", "2026-03-23", "2026-04-02", "2026-04-03", "2026-05-01",
    "2026-05-18", "2026-06-08", "2026-06-15", "2026-06-29", "2026-07-20", "2026-08-07",
    "2026-08-17", "2026-10-12", "2026-11-02", "2026-11-16", "2026-12-08", "2026-12-25",
];

fn keys(dates: Vec<NaiveDate>) -> Vec<String> {
    dates.into_iter().map(holiday_key).collect()
}

#[test]
fn weekday_holidays_2025() {
    assert_eq!(keys(weekday_holidays(2025)), HOLIDAYS_2025);
}

#[test]
fn all_holidays_2026() {
    assert_eq!(keys(holidays(2026)), HOLIDAYS_2026);
}

#[test]
fn provider_calendar_skips_rule_based_holidays() {
    let provider = HolidayProvider::new(StaticSource::colombia(2025, 2026));
    let cal = provider.calendar(&Default::default()).unwrap();
    assert_eq!(provider.origin(), HolidayOrigin::Fetched);
    // Fri 2025-11-14 → Tue 2025-11-18 (Mon 17th is Independence of Cartagena).
    let next = cal
        .next_working_day(
            NaiveDate::from_ymd_opt(2025, 11, 14).unwrap(),
            &mut WalkStats::default(),
        )
        .unwrap();
    assert_eq!(next, NaiveDate::from_ymd_opt(2025, 11, 18).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn easter_is_a_spring_sunday(year in 1900i32..2200) {
        let e = easter_sunday(year).unwrap();
        prop_assert_eq!(e.weekday(), Weekday::Sun);
        prop_assert!(e >= NaiveDate::from_ymd_opt(year, 3, 22).unwrap());
        prop_assert!(e <= NaiveDate::from_ymd_opt(year, 4, 25).unwrap());
    }

    #[test]
    fn every_year_has_sixteen_to_eighteen_holidays(year in 1984i32..2100) {
        let n = holidays(year).len();
        prop_assert!((16..=18).contains(&n), "{} has {} holidays", year, n);
    }
}
