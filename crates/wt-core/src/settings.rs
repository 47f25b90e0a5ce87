//! Engine settings.
//!
//! [`EngineSettings`] describes the working window, the fixed civil UTC
//! offset, the lookahead guard for walking loops, the fast-path thresholds,
//! and where a holiday file lives. Every field has a default, so an empty
//! configuration yields the Colombian office calendar (8–12, 13–17, UTC-5).
//!
//! Settings are layered with the `config` crate:
//! 1. `config/worktime.toml` (optional)
//! 2. Environment variables prefixed with `WORKTIME_`, nested keys separated
//!    by `__` (e.g. `WORKTIME_FAST_PATH__ENABLED=false`)
//!
//! A process-wide snapshot is available through [`EngineSettings::global`];
//! it is loaded exactly once and never mutated afterwards.

use std::path::PathBuf;
use std::sync::OnceLock;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::errors::{Error, Result};
use crate::Hours;

/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Daily working window.
    pub working_hours: WorkingHoursSettings,
    /// Constant offset of the civil zone from UTC, in hours.
    pub utc_offset_hours: i32,
    /// Maximum number of consecutive non-working days a walk may scan.
    pub lookahead_limit_days: u32,
    /// Fast-path thresholds.
    pub fast_path: FastPathSettings,
    /// Holiday source settings.
    pub holidays: HolidaySettings,
}

/// Hour-of-day boundaries of the working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkingHoursSettings {
    /// First working hour (inclusive).
    pub start: u32,
    /// Start of the lunch break.
    pub lunch_start: u32,
    /// End of the lunch break.
    pub lunch_end: u32,
    /// End of the working day (exclusive).
    pub end: u32,
}

/// When and how the heuristic block-skipping strategy is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FastPathSettings {
    /// Master switch. When `false` every calculation is iterative.
    pub enabled: bool,
    /// Day quantities above this select the fast path (if requested).
    pub day_threshold: u32,
    /// Hour quantities above this select the fast path (if requested).
    pub hour_threshold: Hours,
    /// Summed hour terms above this select the fast path (if requested).
    pub multi_hour_threshold: Hours,
    /// Estimated calendar span above which whole weeks are skipped.
    pub min_skip_calendar_days: u32,
}

/// Holiday source settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HolidaySettings {
    /// Optional JSON file holding an array of `YYYY-MM-DD` strings.
    pub file: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            working_hours: WorkingHoursSettings::default(),
            utc_offset_hours: -5,
            lookahead_limit_days: 366,
            fast_path: FastPathSettings::default(),
            holidays: HolidaySettings::default(),
        }
    }
}

impl Default for WorkingHoursSettings {
    fn default() -> Self {
        Self {
            start: 8,
            lunch_start: 12,
            lunch_end: 13,
            end: 17,
        }
    }
}

impl Default for FastPathSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            day_threshold: 30,
            hour_threshold: 240.0,
            multi_hour_threshold: 40.0,
            min_skip_calendar_days: 30,
        }
    }
}

static GLOBAL: OnceLock<EngineSettings> = OnceLock::new();

impl EngineSettings {
    /// Load settings from `config/worktime.toml` and `WORKTIME_*` variables.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/worktime").required(false))
            .add_source(
                Environment::with_prefix("WORKTIME")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let settings: EngineSettings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from an inline TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let settings: EngineSettings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Return the process-wide settings snapshot.
    ///
    /// The first call loads them; a load failure is logged and the defaults
    /// are used instead.
    pub fn global() -> &'static EngineSettings {
        GLOBAL.get_or_init(|| match Self::load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default engine settings");
                Self::default()
            }
        })
    }

    /// Check the invariants that the engine relies on.
    pub fn validate(&self) -> Result<()> {
        let w = &self.working_hours;
        let morning = w.start < w.lunch_start && w.lunch_start < w.lunch_end;
        let afternoon = w.lunch_end < w.end && w.end <= 24;
        if !(morning && afternoon) {
            return Err(Error::Config(format!(
                "working hours must satisfy start < lunch_start < lunch_end < end <= 24, \
                 got {}/{}/{}/{}",
                w.start, w.lunch_start, w.lunch_end, w.end
            )));
        }
        if self.utc_offset_hours.abs() > 23 {
            return Err(Error::Config(format!(
                "utc offset {}h out of range [-23, 23]",
                self.utc_offset_hours
            )));
        }
        if self.lookahead_limit_days == 0 {
            return Err(Error::Config("lookahead limit must be positive".into()));
        }
        let fp = &self.fast_path;
        if !(fp.hour_threshold >= 0.0 && fp.multi_hour_threshold >= 0.0) {
            return Err(Error::Config(
                "fast-path hour thresholds must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_colombian_office_hours() {
        let s = EngineSettings::default();
        assert_eq!(s.working_hours.start, 8);
        assert_eq!(s.working_hours.lunch_start, 12);
        assert_eq!(s.working_hours.lunch_end, 13);
        assert_eq!(s.working_hours.end, 17);
        assert_eq!(s.utc_offset_hours, -5);
        assert!(s.fast_path.enabled);
        assert_eq!(s.fast_path.day_threshold, 30);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let s = EngineSettings::from_toml_str(
            r#"
            lookahead_limit_days = 30

            [fast_path]
            enabled = false
            multi_hour_threshold = 16.0

            [working_hours]
            start = 7
            "#,
        )
        .unwrap();
        assert_eq!(s.lookahead_limit_days, 30);
        assert!(!s.fast_path.enabled);
        assert_eq!(s.fast_path.multi_hour_threshold, 16.0);
        assert_eq!(s.fast_path.day_threshold, 30);
        assert_eq!(s.working_hours.start, 7);
        assert_eq!(s.working_hours.end, 17);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = EngineSettings::from_toml_str(
            r#"
            [working_hours]
            lunch_start = 14
            lunch_end = 13
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn window_past_midnight_is_rejected() {
        let mut s = EngineSettings::default();
        s.working_hours.end = 25;
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("end <= 24"));
        s.working_hours.end = 24;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn zero_lookahead_is_rejected() {
        let s = EngineSettings {
            lookahead_limit_days: 0,
            ..EngineSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn absurd_offset_is_rejected() {
        let s = EngineSettings {
            utc_offset_hours: 30,
            ..EngineSettings::default()
        };
        assert!(s.validate().is_err());
    }
}
