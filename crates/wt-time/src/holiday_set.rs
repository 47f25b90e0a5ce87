//! `HolidaySet` — an immutable set of civil holiday dates.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use wt_core::{Error, Result};

/// Format used for holiday keys.
pub const HOLIDAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A set of holiday dates keyed by exact `YYYY-MM-DD`.
///
/// Membership is exact date equality. The set is shared behind an `Arc`, so
/// cloning it (and every calendar built on it) is cheap and never copies
/// the dates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidaySet {
    dates: Arc<HashSet<NaiveDate>>,
}

impl HolidaySet {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-parsed dates. Duplicates collapse.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: Arc::new(dates.into_iter().collect()),
        }
    }

    /// Parse `YYYY-MM-DD` keys.
    ///
    /// Fails on the first key that is not an exact ten-character date.
    pub fn parse<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = keys
            .into_iter()
            .map(|k| parse_key(k.as_ref()))
            .collect::<Result<HashSet<_>>>()?;
        Ok(Self {
            dates: Arc::new(dates),
        })
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return `true` if both handles share the same underlying snapshot.
    pub fn shares_snapshot(&self, other: &HolidaySet) -> bool {
        Arc::ptr_eq(&self.dates, &other.dates)
    }
}

/// Format a date as its holiday key.
pub fn holiday_key(date: NaiveDate) -> String {
    date.format(HOLIDAY_KEY_FORMAT).to_string()
}

fn parse_key(key: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields ("2025-1-6"); holiday keys must be exact.
    if key.len() != 10 {
        return Err(Error::Date(format!("holiday key {key:?} is not YYYY-MM-DD")));
    }
    NaiveDate::parse_from_str(key, HOLIDAY_KEY_FORMAT)
        .map_err(|e| Error::Date(format!("holiday key {key:?}: {e}")))
}
