//! Request-to-response behaviour of `WorkingTimeService`.

use chrono::NaiveDate;
use wt_api::{CalculationQuery, WorkingTimeService};
use wt_core::EngineSettings;
use wt_engine::CalculationMethod;
use wt_holidays::{HolidayOrigin, HolidayProvider, StaticSource};
use wt_time::{BusinessCalendar, HolidaySet};

const HOLIDAYS_2025: [&str; 16] = [
    "2025-01-01", "2025-01-06", "2025-03-24", "2025-04-17", "2025-04-18", "2025-05-01",
    "2025-06-02", "2025-06-23", "2025-06-30", "2025-08-07", "2025-08-18", "2025-10-13",
    "2025-11-03", "2025-11-17", "2025-12-08", "2025-12-25",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn service() -> WorkingTimeService {
    init_tracing();
    let provider = HolidayProvider::new(StaticSource::new(HOLIDAYS_2025));
    WorkingTimeService::new(EngineSettings::default(), &provider).unwrap()
}

fn query(pairs: &[(&str, &str)]) -> CalculationQuery {
    let map: serde_json::Map<String, serde_json::Value> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    serde_json::from_value(serde_json::Value::Object(map)).unwrap()
}

fn date_of(svc: &WorkingTimeService, pairs: &[(&str, &str)]) -> String {
    svc.handle(&query(pairs)).unwrap().date
}

#[test]
fn saturday_morning_plus_two_days_three_hours() {
    // 15:30Z is 10:30 in Bogotá: Sat → Fri 10:30 → Wed 10:30 (Mon is a holiday) → 14:30.
    let svc = service();
    let date = date_of(
        &svc,
        &[("days", "2"), ("hours", "3"), ("date", "2025-11-01T15:30:00.000Z")],
    );
    assert_eq!(date, "2025-11-05T19:30:00.000Z");
}

#[test]
fn thursday_morning_plus_three_days_four_hours() {
    let svc = service();
    let date = date_of(
        &svc,
        &[("days", "3"), ("hours", "4"), ("date", "2025-10-30T14:00:00.000Z")],
    );
    assert_eq!(date, "2025-11-05T19:00:00.000Z");
}

#[test]
fn lunch_start_backward_and_forward() {
    let svc = service();
    let back = date_of(&svc, &[("hours", "2"), ("date", "2025-10-30T17:30:00.000Z")]);
    assert_eq!(back, "2025-10-30T19:59:59.000Z");
    let fwd = date_of(
        &svc,
        &[
            ("hours", "2"),
            ("date", "2025-10-30T17:30:00.000Z"),
            ("approximateToNext", "true"),
        ],
    );
    assert_eq!(fwd, "2025-10-30T20:00:00.000Z");
}

#[test]
fn hour_list_filling_the_day_ends_at_five() {
    let svc = service();
    let date = date_of(
        &svc,
        &[("hours", "1,2,1.5,0.5,3"), ("date", "2025-10-30T13:00:00Z")],
    );
    assert_eq!(date, "2025-10-30T22:00:00.000Z");
}

#[test]
fn friday_evening_rounds_down_then_walks() {
    // Fri 17:00 local → 16:59:59; 1s before close, 59m59s on Tuesday.
    let svc = service();
    let date = date_of(&svc, &[("hours", "1"), ("date", "2025-10-31T22:00:00Z")]);
    assert_eq!(date, "2025-11-04T13:59:59.000Z");
}

#[test]
fn saturday_included_by_flag() {
    let svc = service();
    let date = date_of(
        &svc,
        &[
            ("hours", "3"),
            ("date", "2025-11-01T15:00:00Z"),
            ("includeSaturday", "true"),
        ],
    );
    assert_eq!(date, "2025-11-01T19:00:00.000Z");
}

#[test]
fn advanced_response_reports_bookkeeping() {
    let svc = service();
    let body = svc
        .handle_advanced(&query(&[
            ("days", "100"),
            ("hours", "50"),
            ("date", "2025-10-30T13:00:00Z"),
            ("optimize", "true"),
        ]))
        .unwrap();
    assert_eq!(body.calculation_method, CalculationMethod::Optimized);
    assert_eq!(body.working_days_added, 100);
    assert_eq!(body.working_hours_added, 50.0);
    assert!(body.weekends_skipped >= 40);

    let body = svc
        .handle_advanced(&query(&[("days", "2"), ("date", "2025-10-31T14:00:00Z")]))
        .unwrap();
    assert_eq!(body.calculation_method, CalculationMethod::Iterative);
    assert_eq!(body.weekends_skipped, 2);
    assert_eq!(body.holidays_skipped, 1);
}

#[test]
fn missing_date_uses_now() {
    let svc = service();
    let (status, body) = svc.respond(&query(&[("hours", "1")]), false);
    assert_eq!(status, 200);
    assert!(body.contains("\"date\""));
}

#[test]
fn invalid_parameters_are_400() {
    let svc = service();
    let (status, body) = svc.respond(&query(&[]), false);
    assert_eq!(status, 400);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "InvalidParameters");

    let (status, _) = svc.respond(&query(&[("hours", "1"), ("date", "2025-10-30 13:00")]), true);
    assert_eq!(status, 400);
}

#[test]
fn guard_trip_is_opaque_503() {
    init_tracing();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let calendar = BusinessCalendar::new(HolidaySet::from_dates(start.iter_days().take(400)));
    let svc = WorkingTimeService::with_calendar(EngineSettings::default(), calendar).unwrap();
    let (status, body) = svc.respond(
        &query(&[("days", "1"), ("date", "2025-01-01T14:00:00Z")]),
        false,
    );
    assert_eq!(status, 503);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "InternalServerError");
}

#[test]
fn optimized_jump_out_of_date_range_is_opaque_503() {
    let svc = service();
    let (status, body) = svc.respond(
        &query(&[
            ("days", "4000000000"),
            ("optimize", "true"),
            ("date", "2025-10-30T13:00:00Z"),
        ]),
        true,
    );
    assert_eq!(status, 503);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "InternalServerError");
    assert!(!json["message"].as_str().unwrap().contains("weeks"));
}

#[test]
fn unreadable_holiday_file_falls_back() {
    let mut settings = EngineSettings::default();
    settings.holidays.file = Some("/definitely/not/here/holidays.json".into());
    let provider = HolidayProvider::from_settings(&settings).unwrap();
    assert_eq!(provider.origin(), HolidayOrigin::Fallback);
    let svc = WorkingTimeService::new(settings, &provider).unwrap();
    assert!(!svc.calendar().holidays().is_empty());
}
