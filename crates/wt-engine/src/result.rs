//! Calculation results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use wt_core::{DayCount, Hours};

/// Which algorithm produced a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// Exact day-by-day and segment-by-segment walk.
    #[default]
    Iterative,
    /// Whole-week skip followed by an exact walk of the remainder.
    Optimized,
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CalculationMethod::Iterative => "iterative",
            CalculationMethod::Optimized => "optimized",
        })
    }
}

/// Outcome of one calculation, in local civil time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingTimeResult {
    /// The resulting local instant.
    pub instant: NaiveDateTime,
    /// Working days requested.
    pub working_days_added: DayCount,
    /// Working hours requested (terms summed).
    pub working_hours_added: Hours,
    /// Non-working weekend days crossed.
    pub weekends_skipped: u32,
    /// Holidays crossed.
    pub holidays_skipped: u32,
    /// Algorithm used.
    pub method: CalculationMethod,
}
