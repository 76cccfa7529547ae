//! End-to-end tests for the forecasting pipeline
//!
//! Run the complete data source -> model -> response flow through the
//! facade only.

use chrono::{NaiveDate, NaiveDateTime};
use forecast_facade::{
    try_run_at, ForecastResponse, GeneratorConfig, PipelineSettings, SourceKind,
};
use serde_json::Value;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 18)
        .unwrap()
        .and_hms_micro_opt(10, 15, 42, 517_003)
        .unwrap()
}

fn seeded(source: SourceKind) -> PipelineSettings {
    PipelineSettings {
        source,
        seed: Some(20240918),
        ..PipelineSettings::default()
    }
}

#[test]
fn e2e_default_run() {
    let response = try_run_at(&seeded(SourceKind::Synthetic), fixed_now()).unwrap();

    let ForecastResponse::Success(success) = response else {
        panic!("expected success");
    };

    assert_eq!(success.model_info.training_samples, 30 * 24 + 1);
    assert_eq!(success.model_info.forecast_horizon_hours, 48);
    assert!(success.model_info.training_duration_ms.is_some());
    assert_eq!(success.forecast.len(), 48);
    assert_eq!(success.historical.len(), 72);

    for point in &success.forecast {
        assert!(point.lower <= point.predicted, "{:?}", point);
        assert!(point.predicted <= point.upper, "{:?}", point);
    }

    assert_eq!(
        success.historical.last().unwrap().timestamp,
        "2024-09-18T10:15:42.517003"
    );
    assert_eq!(success.forecast[0].timestamp, "2024-09-18T11:15:42.517003");
    assert_eq!(success.forecast[47].timestamp, "2024-09-20T10:15:42.517003");
}

#[test]
fn e2e_forecast_tracks_daily_shape() {
    let response = try_run_at(&seeded(SourceKind::Synthetic), fixed_now()).unwrap();
    let ForecastResponse::Success(success) = response else {
        panic!("expected success");
    };

    // Forecast window starts at 11:15 on a Wednesday: index 1 is ~12:15, index 13 is ~00:15
    let midday = success.forecast[1].predicted;
    let midnight = success.forecast[13].predicted;
    assert!(midday > midnight + 40.0, "{} vs {}", midday, midnight);
}

#[test]
fn e2e_live_flag_is_inert() {
    let synthetic = try_run_at(&seeded(SourceKind::Synthetic), fixed_now()).unwrap();
    let live = try_run_at(&seeded(SourceKind::Live), fixed_now()).unwrap();

    let (ForecastResponse::Success(a), ForecastResponse::Success(b)) = (synthetic, live) else {
        panic!("expected two successes");
    };

    assert_eq!(a.historical, b.historical);
    assert_eq!(a.forecast, b.forecast);
    assert_eq!(a.model_info.training_samples, b.model_info.training_samples);
}

#[test]
fn e2e_json_document_shape() {
    let response = try_run_at(&seeded(SourceKind::Synthetic), fixed_now()).unwrap();
    let json: Value = serde_json::from_str(&response.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["historical"].as_array().unwrap().len(), 72);
    assert_eq!(json["forecast"].as_array().unwrap().len(), 48);
    assert!(json["historical"][0]["actual"].is_f64());
    for key in ["timestamp", "predicted", "lower", "upper"] {
        assert!(json["forecast"][0].get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["model_info"]["training_samples"], 721);
    assert_eq!(json["model_info"]["forecast_horizon_hours"], 48);
    assert!(json["model_info"]["generated_at"].is_string());
    assert!(json["model_info"]["training_duration_ms"].is_u64());
}

#[test]
fn e2e_custom_window_and_horizon() {
    let settings = PipelineSettings {
        horizon: 12,
        generator: GeneratorConfig {
            window_days: 2,
            ..GeneratorConfig::default()
        },
        ..seeded(SourceKind::Synthetic)
    };

    let response = try_run_at(&settings, fixed_now()).unwrap();
    let info = response.model_info().unwrap();
    assert_eq!(info.training_samples, 49);
    assert_eq!(info.forecast_horizon_hours, 12);
}

#[test]
fn e2e_zero_horizon_reports_failure() {
    let settings = PipelineSettings {
        horizon: 0,
        ..seeded(SourceKind::Synthetic)
    };

    let response = try_run_at(&settings, fixed_now()).unwrap();
    let json: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], false);
    assert!(!json["error"].as_str().unwrap().is_empty());
    assert!(json.get("forecast").is_none());
}
