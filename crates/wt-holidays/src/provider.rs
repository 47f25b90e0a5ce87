//! `HolidayProvider` — fetch once, fall back on failure, never change.
//!
//! The first caller of [`HolidayProvider::snapshot`] runs the source; any
//! concurrent first callers block on the same `OnceLock` and observe the
//! same result. A failed fetch or a malformed key substitutes
//! [`fallback_holidays`] for the current civil year and logs a warning. The
//! snapshot is shared by reference count with every calendar built from it.

use std::sync::OnceLock;

use chrono::Datelike;
use tracing::{info, warn};
use wt_core::{EngineSettings, Result};
use wt_time::{BusinessCalendar, CivilZone, HolidaySet};

use crate::fallback::fallback_holidays;
use crate::source::{HolidaySource, JsonFileSource, StaticSource};

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayOrigin {
    /// The configured source answered with valid keys.
    Fetched,
    /// The source failed and the fallback list was substituted.
    Fallback,
}

/// An immutable holiday set plus its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidaySnapshot {
    /// The holidays.
    pub holidays: HolidaySet,
    /// Where they came from.
    pub origin: HolidayOrigin,
}

/// Lazily fetched, process-lifetime holiday snapshot.
#[derive(Debug)]
pub struct HolidayProvider {
    source: Box<dyn HolidaySource>,
    fallback_year: Option<i32>,
    snapshot: OnceLock<HolidaySnapshot>,
}

impl HolidayProvider {
    /// A provider backed by `source`.
    pub fn new(source: impl HolidaySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            fallback_year: None,
            snapshot: OnceLock::new(),
        }
    }

    /// A provider for `settings`: the configured JSON file if any, else the
    /// rule-based Colombian list for this year and the next.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        match &settings.holidays.file {
            Some(path) => Ok(Self::new(JsonFileSource::new(path))),
            None => {
                let year = CivilZone::from_settings(settings)?.now().year();
                Ok(Self::new(StaticSource::colombia(year, year + 1)))
            }
        }
    }

    /// Pin the fallback year instead of using the current civil year.
    pub fn with_fallback_year(mut self, year: i32) -> Self {
        self.fallback_year = Some(year);
        self
    }

    /// The snapshot, fetching it on first use.
    pub fn snapshot(&self) -> &HolidaySnapshot {
        self.snapshot.get_or_init(|| self.load())
    }

    /// The holiday set.
    pub fn holidays(&self) -> HolidaySet {
        self.snapshot().holidays.clone()
    }

    /// Where the snapshot came from.
    pub fn origin(&self) -> HolidayOrigin {
        self.snapshot().origin
    }

    /// Return `true` once the snapshot has been taken.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// A calendar for `settings` sharing this provider's snapshot.
    pub fn calendar(&self, settings: &EngineSettings) -> Result<BusinessCalendar> {
        BusinessCalendar::from_settings(settings, self.holidays())
    }

    fn load(&self) -> HolidaySnapshot {
        match self.source.fetch().and_then(HolidaySet::parse) {
            Ok(holidays) => {
                info!(source = self.source.name(), count = holidays.len(), "loaded holidays");
                HolidaySnapshot {
                    holidays,
                    origin: HolidayOrigin::Fetched,
                }
            }
            Err(err) => {
                let year = self
                    .fallback_year
                    .unwrap_or_else(|| CivilZone::default().now().year());
                warn!(
                    source = self.source.name(),
                    error = %err,
                    year,
                    "holiday source failed, using fallback list"
                );
                HolidaySnapshot {
                    holidays: fallback_holidays(year),
                    origin: HolidayOrigin::Fallback,
                }
            }
        }
    }
}
