//! `CivilZone` — the fixed-offset civil time zone the engine computes in.
//!
//! The zone has a constant UTC offset and no daylight-saving transitions, so
//! local civil time is a pure shift of UTC and conversions are total.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};
use wt_core::{ensure, EngineSettings, Result};

/// Bogotá's constant offset from UTC, in hours.
pub const BOGOTA_UTC_OFFSET_HOURS: i32 = -5;

/// A fixed-offset civil zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilZone {
    offset_secs: i32,
}

impl Default for CivilZone {
    fn default() -> Self {
        Self::bogota()
    }
}

impl CivilZone {
    /// America/Bogota (UTC-5).
    pub const fn bogota() -> Self {
        Self {
            offset_secs: BOGOTA_UTC_OFFSET_HOURS * 3600,
        }
    }

    /// A zone `hours` east of UTC (negative for west).
    pub fn from_offset_hours(hours: i32) -> Result<Self> {
        ensure!(
            hours.abs() <= 23,
            "utc offset {hours}h out of range [-23, 23]"
        );
        Ok(Self {
            offset_secs: hours * 3600,
        })
    }

    /// The zone configured in `settings`.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        Self::from_offset_hours(settings.utc_offset_hours)
    }

    /// Local time minus UTC, in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.offset_secs
    }

    /// Convert an absolute instant to local civil time.
    pub fn to_local(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        utc.naive_utc() + Duration::seconds(self.offset_secs as i64)
    }

    /// Convert local civil time back to an absolute instant.
    pub fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let naive_utc = local - Duration::seconds(self.offset_secs as i64);
        DateTime::from_naive_utc_and_offset(naive_utc, Utc)
    }

    /// The current local civil time.
    pub fn now(&self) -> NaiveDateTime {
        self.to_local(Utc::now())
    }
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
