//! `WeekendPolicy` — which weekend days count as working days.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Weekend inclusion policy.
///
/// Monday–Friday are always candidate working days; Saturday and Sunday are
/// only when the matching flag is set. The default is Monday–Friday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeekendPolicy {
    /// Treat Saturday as a working day.
    pub include_saturday: bool,
    /// Treat Sunday as a working day.
    pub include_sunday: bool,
}

impl WeekendPolicy {
    /// Monday–Friday only.
    pub const MON_FRI: WeekendPolicy = WeekendPolicy {
        include_saturday: false,
        include_sunday: false,
    };

    /// Monday–Saturday.
    pub const MON_SAT: WeekendPolicy = WeekendPolicy {
        include_saturday: true,
        include_sunday: false,
    };

    /// Every day of the week.
    pub const ALL_WEEK: WeekendPolicy = WeekendPolicy {
        include_saturday: true,
        include_sunday: true,
    };

    /// Return `true` if `weekday` is a working weekday under this policy.
    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sat => self.include_saturday,
            Weekday::Sun => self.include_sunday,
            _ => true,
        }
    }

    /// Number of working weekdays per week (5, 6, or 7).
    pub fn working_days_per_week(&self) -> u32 {
        5 + self.include_saturday as u32 + self.include_sunday as u32
    }
}
