//! The holiday list substituted when the configured source fails.

use wt_time::HolidaySet;

use crate::colombia;

/// Rule-based Colombian holidays for `year` and `year + 1`.
///
/// Two years are covered so that walks started late in December still see
/// the next January's holidays.
pub fn fallback_holidays(year: i32) -> HolidaySet {
    HolidaySet::from_dates(
        colombia::holidays(year)
            .into_iter()
            .chain(colombia::holidays(year + 1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn covers_two_years() {
        let set = fallback_holidays(2025);
        assert!(set.contains(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
        assert!(set.contains(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(!set.contains(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()));
    }
}
