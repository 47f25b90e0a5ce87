//! Request-level options and the quantity to add.

use serde::{Deserialize, Serialize};
use wt_core::{ensure, DayCount, Hours, Result};
use wt_time::{SnapDirection, WeekendPolicy};

/// Options that alter one calculation without touching the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationOptions {
    /// Override the calendar's weekend policy for this request only.
    pub weekend_policy: Option<WeekendPolicy>,
    /// Snap an off-hours start forward instead of backward.
    pub approximate_to_next: bool,
    /// Allow the fast path when the quantity is large enough.
    pub optimize: bool,
}

impl CalculationOptions {
    /// Set the weekend policy override.
    pub fn with_weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.weekend_policy = Some(policy);
        self
    }

    /// Snap forward when `yes`.
    pub fn approximate_to_next(mut self, yes: bool) -> Self {
        self.approximate_to_next = yes;
        self
    }

    /// Allow the fast path when `yes`.
    pub fn optimize(mut self, yes: bool) -> Self {
        self.optimize = yes;
        self
    }

    /// The snap direction these options imply.
    pub fn snap_direction(&self) -> SnapDirection {
        SnapDirection::from_approximate_to_next(self.approximate_to_next)
    }
}

/// Working days and working hours to add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Whole working days.
    pub days: DayCount,
    /// Working hours (fractional allowed).
    pub hours: Hours,
}

impl Quantity {
    /// `days` working days followed by `hours` working hours.
    pub fn new(days: DayCount, hours: Hours) -> Self {
        Self { days, hours }
    }

    /// Only working days.
    pub fn days(days: DayCount) -> Self {
        Self::new(days, 0.0)
    }

    /// Only working hours.
    pub fn hours(hours: Hours) -> Self {
        Self::new(0, hours)
    }

    /// Return `true` if nothing is to be added.
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0.0
    }

    /// Reject negative or non-finite hours.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.hours.is_finite() && self.hours >= 0.0,
            "hours must be a finite non-negative number, got {}",
            self.hours
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_from_camel_case() {
        let opts: CalculationOptions = serde_json::from_str(
            r#"{"approximateToNext":true,"weekendPolicy":{"includeSaturday":true}}"#,
        )
        .unwrap();
        assert!(opts.approximate_to_next);
        assert!(!opts.optimize);
        assert_eq!(opts.weekend_policy, Some(WeekendPolicy::MON_SAT));
        assert_eq!(opts.snap_direction(), SnapDirection::Forward);
    }

    #[test]
    fn negative_and_nan_hours_are_rejected() {
        assert!(Quantity::hours(-1.0).validate().is_err());
        assert!(Quantity::hours(f64::NAN).validate().is_err());
        assert!(Quantity::hours(f64::INFINITY).validate().is_err());
        assert!(Quantity::new(3, 0.5).validate().is_ok());
        assert!(Quantity::default().is_zero());
    }
}
