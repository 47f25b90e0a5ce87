//! Colombian public holidays.
//!
//! Holidays in Colombia (Ley 51 de 1983, "Ley Emiliani") come in three kinds:
//!
//! | Kind              | Dates                                                   |
//! |-------------------|---------------------------------------------------------|
//! | Fixed             | Jan 1, May 1, Jul 20, Aug 7, Dec 8, Dec 25              |
//! | Moved to Monday   | Jan 6, Mar 19, Jun 29, Aug 15, Oct 12, Nov 1, Nov 11    |
//! | Easter-based      | Holy Thursday, Good Friday (fixed);                     |
//! |                   | Ascension +43, Corpus Christi +64, Sacred Heart +71     |
//!
//! "Moved to Monday" holidays that do not already fall on a Monday are
//! observed on the following Monday. Easter offsets are counted from Easter
//! Sunday and always land on a Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

const FIXED: [(u32, u32); 6] = [(1, 1), (5, 1), (7, 20), (8, 7), (12, 8), (12, 25)];

const MOVED_TO_MONDAY: [(u32, u32); 7] = [
    (1, 6),
    (3, 19),
    (6, 29),
    (8, 15),
    (10, 12),
    (11, 1),
    (11, 11),
];

/// Offsets from Easter Sunday, in days.
const EASTER_OFFSETS: [i64; 5] = [
    -3, // Holy Thursday
    -2, // Good Friday
    43, // Ascension
    64, // Corpus Christi
    71, // Sacred Heart
];

/// Easter Sunday of `year` (Gregorian), via Oudin's algorithm.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// `date` if it is a Monday, else the following Monday.
pub fn next_monday(date: NaiveDate) -> NaiveDate {
    let ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(ahead as i64)
}

/// All Colombian public holidays of `year`, sorted and de-duplicated.
///
/// Includes holidays that fall on weekends (e.g. Jul 20, 2025, a Sunday).
pub fn holidays(year: i32) -> Vec<NaiveDate> {
    let fixed = FIXED
        .iter()
        .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(year, m, d));
    let moved = MOVED_TO_MONDAY
        .iter()
        .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .map(next_monday);
    let easter = easter_sunday(year)
        .into_iter()
        .flat_map(|e| EASTER_OFFSETS.iter().map(move |&off| e + Duration::days(off)));

    let mut all: Vec<NaiveDate> = fixed.chain(moved).chain(easter).collect();
    all.sort_unstable();
    all.dedup();
    all
}

/// Holidays of `year` that fall Monday to Friday.
pub fn weekday_holidays(year: i32) -> Vec<NaiveDate> {
    holidays(year)
        .into_iter()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}
