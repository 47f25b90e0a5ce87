//! `WorkingHours` — the daily working window with its lunch break.

use chrono::{NaiveTime, Timelike};
use wt_core::{ensure, Hours, Result, WorkingHoursSettings, MILLIS_PER_HOUR};

/// Where a clock time falls relative to the working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySegment {
    /// Hour-of-day before `start`.
    BeforeStart,
    /// `[start, lunch_start)`.
    Morning,
    /// `[lunch_start, lunch_end)`.
    Lunch,
    /// `[lunch_end, end)`.
    Afternoon,
    /// Hour-of-day at or after `end`.
    AfterEnd,
}

impl DaySegment {
    /// Return `true` for the two segments in which business time accrues.
    pub fn is_working(&self) -> bool {
        matches!(self, DaySegment::Morning | DaySegment::Afternoon)
    }
}

/// Four hour-of-day boundaries: `start < lunch_start < lunch_end < end`.
///
/// Segments are classified by the hour-of-day alone, so 11:59:59 is still
/// morning and 12:00:00 is already lunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingHours {
    start: u32,
    lunch_start: u32,
    lunch_end: u32,
    end: u32,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WorkingHours {
    /// 08:00–12:00 and 13:00–17:00.
    pub const DEFAULT: WorkingHours = WorkingHours {
        start: 8,
        lunch_start: 12,
        lunch_end: 13,
        end: 17,
    };

    /// Create a working window, checking `0 <= start < lunch_start < lunch_end < end <= 24`.
    pub fn new(start: u32, lunch_start: u32, lunch_end: u32, end: u32) -> Result<Self> {
        ensure!(
            start < lunch_start && lunch_start < lunch_end && lunch_end < end && end <= 24,
            "working hours must satisfy 0 <= start < lunch_start < lunch_end < end <= 24, \
             got {start}/{lunch_start}/{lunch_end}/{end}"
        );
        Ok(Self {
            start,
            lunch_start,
            lunch_end,
            end,
        })
    }

    /// Build from the `[working_hours]` settings table.
    pub fn from_settings(s: &WorkingHoursSettings) -> Result<Self> {
        Self::new(s.start, s.lunch_start, s.lunch_end, s.end)
    }

    /// First working hour.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Hour the lunch break begins.
    pub fn lunch_start(&self) -> u32 {
        self.lunch_start
    }

    /// Hour the lunch break ends.
    pub fn lunch_end(&self) -> u32 {
        self.lunch_end
    }

    /// Hour the working day ends.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Business hours in one full working day (8 for the default window).
    pub fn daily_hours(&self) -> Hours {
        ((self.lunch_start - self.start) + (self.end - self.lunch_end)) as Hours
    }

    /// Classify an hour-of-day.
    pub fn segment_of_hour(&self, hour: u32) -> DaySegment {
        if hour < self.start {
            DaySegment::BeforeStart
        } else if hour < self.lunch_start {
            DaySegment::Morning
        } else if hour < self.lunch_end {
            DaySegment::Lunch
        } else if hour < self.end {
            DaySegment::Afternoon
        } else {
            DaySegment::AfterEnd
        }
    }

    /// Classify a clock time by its hour.
    pub fn segment(&self, time: NaiveTime) -> DaySegment {
        self.segment_of_hour(time.hour())
    }

    /// Return `true` if `hour` lies in `[start, lunch_start) ∪ [lunch_end, end)`.
    pub fn is_working_hour(&self, hour: u32) -> bool {
        self.segment_of_hour(hour).is_working()
    }

    /// `start:00:00`.
    pub fn start_time(&self) -> NaiveTime {
        hms(self.start, 0, 0)
    }

    /// `lunch_end:00:00`.
    pub fn lunch_end_time(&self) -> NaiveTime {
        hms(self.lunch_end, 0, 0)
    }

    /// `lunch_start-1:59:59`, the last second of the morning.
    pub fn last_morning_second(&self) -> NaiveTime {
        hms(self.lunch_start - 1, 59, 59)
    }

    /// `end-1:59:59`, the last second of the afternoon.
    pub fn last_afternoon_second(&self) -> NaiveTime {
        hms(self.end - 1, 59, 59)
    }

    /// Milliseconds of business time left in the current segment, measured
    /// from the exact clock time. Zero outside the working segments.
    pub fn millis_until_break(&self, time: NaiveTime) -> i64 {
        let boundary = match self.segment(time) {
            DaySegment::Morning => self.lunch_start,
            DaySegment::Afternoon => self.end,
            _ => return 0,
        };
        boundary as i64 * MILLIS_PER_HOUR - millis_of_day(time)
    }
}

/// Milliseconds elapsed since midnight.
pub fn millis_of_day(time: NaiveTime) -> i64 {
    time.num_seconds_from_midnight() as i64 * 1_000 + (time.nanosecond() / 1_000_000) as i64
}

fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    // Every caller passes an hour below 24 (guaranteed by `WorkingHours::new`).
    NaiveTime::from_hms_opt(hour, min, sec).unwrap_or(NaiveTime::MIN)
}
