//! `WorkingTimeService` — one validated request in, one response out.
//!
//! Steps per request: take "now" if no date was sent, shift UTC into the
//! civil zone, run the calculator, shift back, format with milliseconds and
//! a `Z` suffix.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use wt_core::{EngineSettings, Error, Result};
use wt_engine::{WorkingTimeCalculator, WorkingTimeResult};
use wt_holidays::HolidayProvider;
use wt_time::{format_utc, BusinessCalendar, CivilZone};

use crate::request::{CalculationQuery, CalculationRequest};
use crate::response::{http_status, AdvancedResponse, BasicResponse, ErrorResponse};

/// Stateless request handler over a fixed calendar snapshot.
#[derive(Debug, Clone)]
pub struct WorkingTimeService {
    settings: EngineSettings,
    zone: CivilZone,
    calendar: BusinessCalendar,
}

impl WorkingTimeService {
    /// Build from `settings`, taking holidays from `provider`.
    pub fn new(settings: EngineSettings, provider: &HolidayProvider) -> Result<Self> {
        let calendar = provider.calendar(&settings)?;
        Self::with_calendar(settings, calendar)
    }

    /// Build from `settings` with the provider those settings describe.
    pub fn from_settings(settings: EngineSettings) -> Result<Self> {
        let provider = HolidayProvider::from_settings(&settings)?;
        Self::new(settings, &provider)
    }

    /// Build from the process-wide settings snapshot.
    pub fn from_global() -> Result<Self> {
        Self::from_settings(EngineSettings::global().clone())
    }

    /// Build around an existing calendar.
    pub fn with_calendar(settings: EngineSettings, calendar: BusinessCalendar) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            zone: CivilZone::from_settings(&settings)?,
            settings,
            calendar,
        })
    }

    /// The calendar requests run against.
    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Validate `query` and return the basic response.
    #[instrument(level = "debug", skip(self), err)]
    pub fn handle(&self, query: &CalculationQuery) -> Result<BasicResponse> {
        let result = self.run(&query.validate()?, self.zone.now())?;
        Ok(BasicResponse {
            date: self.format(&result),
        })
    }

    /// Validate `query` and return the advanced response.
    #[instrument(level = "debug", skip(self), err)]
    pub fn handle_advanced(&self, query: &CalculationQuery) -> Result<AdvancedResponse> {
        let result = self.run(&query.validate()?, self.zone.now())?;
        Ok(AdvancedResponse {
            date: self.format(&result),
            working_days_added: result.working_days_added,
            working_hours_added: result.working_hours_added,
            weekends_skipped: result.weekends_skipped,
            holidays_skipped: result.holidays_skipped,
            calculation_method: result.method,
        })
    }

    /// Run an already-validated request. `now` is the local instant used
    /// when the request carries no date.
    pub fn run(
        &self,
        request: &CalculationRequest,
        now: NaiveDateTime,
    ) -> Result<WorkingTimeResult> {
        let start = request.date.map_or(now, |utc| self.zone.to_local(utc));
        debug!(%start, days = request.days, terms = request.hour_terms.len(), "start");
        let calculator = WorkingTimeCalculator::new(&self.calendar)
            .with_fast_path(self.settings.fast_path.clone());
        calculator.calculate_with_hour_terms(
            start,
            request.days,
            &request.hour_terms,
            &request.options,
        )
    }

    /// The UTC instant of `result`.
    pub fn to_utc(&self, result: &WorkingTimeResult) -> DateTime<Utc> {
        self.zone.to_utc(result.instant)
    }

    /// Handle `query` and serialize the outcome as `(status, json body)`.
    pub fn respond(&self, query: &CalculationQuery, advanced: bool) -> (u16, String) {
        let body = if advanced {
            self.handle_advanced(query).and_then(|r| to_json(&r))
        } else {
            self.handle(query).and_then(|r| to_json(&r))
        };
        match body {
            Ok(json) => (200, json),
            Err(err) => {
                if !err.is_client_error() {
                    warn!(error = %err, "calculation failed");
                }
                let json = to_json(&ErrorResponse::from(&err)).unwrap_or_else(|_| {
                    r#"{"error":"InternalServerError","message":"internal server error"}"#.into()
                });
                (http_status(&err), json)
            }
        }
    }

    fn format(&self, result: &WorkingTimeResult) -> String {
        format_utc(self.to_utc(result))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Internal(e.to_string()))
}
