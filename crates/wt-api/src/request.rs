//! Query validation.
//!
//! Every field arrives as an optional string, the way a query string
//! delivers it. [`CalculationQuery::validate`] is the only place they are
//! parsed; everything downstream works with typed values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wt_core::{ensure, DayCount, Error, Hours, Result};
use wt_engine::CalculationOptions;
use wt_time::WeekendPolicy;

/// Raw query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationQuery {
    /// Working days to add; a non-negative integer.
    pub days: Option<String>,
    /// Working hours to add; one or more comma-separated non-negative reals.
    pub hours: Option<String>,
    /// Start instant, `YYYY-MM-DDTHH:MM:SS(.mmm)?Z`. Defaults to now.
    pub date: Option<String>,
    /// `true` to snap an off-hours start forward.
    pub approximate_to_next: Option<String>,
    /// `true` to allow the fast path.
    pub optimize: Option<String>,
    /// `true` to count Saturdays as working days.
    pub include_saturday: Option<String>,
    /// `true` to count Sundays as working days.
    pub include_sunday: Option<String>,
}

/// A validated request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    /// Working days to add.
    pub days: DayCount,
    /// Hour terms, in the order given. Empty when no hours were sent.
    pub hour_terms: Vec<Hours>,
    /// Start instant; `None` means "now".
    pub date: Option<DateTime<Utc>>,
    /// Calculation options.
    pub options: CalculationOptions,
}

impl CalculationQuery {
    /// Parse and check every field.
    pub fn validate(&self) -> Result<CalculationRequest> {
        let days = present(&self.days);
        let hours = present(&self.hours);
        ensure!(
            days.is_some() || hours.is_some(),
            "at least one of \"days\" or \"hours\" is required"
        );

        let days = self.days.as_deref().map(parse_days).transpose()?.unwrap_or(0);
        let hour_terms = match self.hours.as_deref() {
            Some(raw) => parse_hour_terms(raw)?,
            None => Vec::new(),
        };
        let date = self.date.as_deref().map(parse_utc_instant).transpose()?;

        let include_saturday = parse_flag("includeSaturday", &self.include_saturday)?;
        let include_sunday = parse_flag("includeSunday", &self.include_sunday)?;
        let weekend_policy = if include_saturday.is_some() || include_sunday.is_some() {
            Some(WeekendPolicy {
                include_saturday: include_saturday.unwrap_or(false),
                include_sunday: include_sunday.unwrap_or(false),
            })
        } else {
            None
        };

        Ok(CalculationRequest {
            days,
            hour_terms,
            date,
            options: CalculationOptions {
                weekend_policy,
                approximate_to_next: parse_flag("approximateToNext", &self.approximate_to_next)?
                    .unwrap_or(false),
                optimize: parse_flag("optimize", &self.optimize)?.unwrap_or(false),
            },
        })
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn parse_days(raw: &str) -> Result<DayCount> {
    let raw = raw.trim();
    ensure!(
        !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()),
        "\"days\" must be a non-negative integer, got {raw:?}"
    );
    raw.parse()
        .map_err(|_| Error::InvalidParameters(format!("\"days\" is out of range: {raw}")))
}

fn parse_hour_terms(raw: &str) -> Result<Vec<Hours>> {
    raw.split(',')
        .map(|term| {
            let term = term.trim();
            let value: Hours = term.parse().map_err(|_| {
                Error::InvalidParameters(format!(
                    "\"hours\" must be non-negative numbers separated by commas, got {term:?}"
                ))
            })?;
            ensure!(
                value.is_finite() && value >= 0.0,
                "\"hours\" must be non-negative numbers separated by commas, got {term:?}"
            );
            Ok(value)
        })
        .collect()
}

fn parse_flag(name: &str, raw: &Option<String>) -> Result<Option<bool>> {
    match raw.as_deref().map(str::trim) {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => Err(Error::InvalidParameters(format!(
            "\"{name}\" must be true or false, got {other:?}"
        ))),
    }
}

/// Return `true` if `s` looks like `YYYY-MM-DDTHH:MM:SSZ` or
/// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
fn has_utc_shape(s: &str) -> bool {
    const SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd";
    let bytes = s.as_bytes();
    let head_ok = bytes.len() >= SHAPE.len()
        && SHAPE.iter().zip(bytes).all(|(&p, &c)| match p {
            b'd' => c.is_ascii_digit(),
            _ => p == c,
        });
    if !head_ok {
        return false;
    }
    match &bytes[SHAPE.len()..] {
        [b'Z'] => true,
        [b'.', millis @ .., b'Z'] => millis.len() == 3 && millis.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn parse_utc_instant(raw: &str) -> Result<DateTime<Utc>> {
    ensure!(
        has_utc_shape(raw),
        "\"date\" must be UTC ISO 8601 with a Z suffix (e.g. 2025-08-01T14:00:00Z), got {raw:?}"
    );
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidParameters(format!("\"date\" is not a real instant: {e}")))
}
