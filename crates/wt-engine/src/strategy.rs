//! Iterative vs. optimized selection.
//!
//! The fast path is only ever used when the caller asked for it, the
//! settings allow it, and the quantity is large enough that skipping weeks
//! pays off.

use wt_core::{DayCount, FastPathSettings, Hours};

use crate::options::CalculationOptions;
use crate::result::CalculationMethod;

/// Choose the method for a single `days` + `hours` quantity.
pub fn select_method(
    days: DayCount,
    hours: Hours,
    options: &CalculationOptions,
    settings: &FastPathSettings,
) -> CalculationMethod {
    if options.optimize
        && settings.enabled
        && (days > settings.day_threshold || hours > settings.hour_threshold)
    {
        CalculationMethod::Optimized
    } else {
        CalculationMethod::Iterative
    }
}

/// Choose the method for `days` plus `term_count` hour terms summing to
/// `total_hours`.
///
/// The single-quantity rule applies to the sum; a list of more than one term
/// is also optimized once its sum passes the lower multi-term threshold.
pub fn select_method_for_terms(
    days: DayCount,
    term_count: usize,
    total_hours: Hours,
    options: &CalculationOptions,
    settings: &FastPathSettings,
) -> CalculationMethod {
    let method = select_method(days, total_hours, options, settings);
    if method == CalculationMethod::Iterative
        && options.optimize
        && settings.enabled
        && term_count > 1
        && total_hours > settings.multi_hour_threshold
    {
        return CalculationMethod::Optimized;
    }
    method
}
