//! End-to-end tests for the command-line front end

use clap::Parser;
use energy_forecast::{execute, parse_args, render, Cli};
use serde_json::Value;

fn run_json(args: &[&str]) -> Value {
    let cli = Cli::parse_from(args);
    serde_json::from_str(&render(&execute(&cli))).unwrap()
}

#[test]
fn e2e_default_invocation() {
    let json = run_json(&["energy-forecast", "--seed", "42"]);

    assert_eq!(json["success"], true);
    assert_eq!(json["model_info"]["training_samples"], 721);
    assert_eq!(json["model_info"]["forecast_horizon_hours"], 48);
    assert_eq!(json["forecast"].as_array().unwrap().len(), 48);
    assert_eq!(json["historical"].as_array().unwrap().len(), 72);

    for point in json["forecast"].as_array().unwrap() {
        let lower = point["lower"].as_f64().unwrap();
        let predicted = point["predicted"].as_f64().unwrap();
        let upper = point["upper"].as_f64().unwrap();
        assert!(lower <= predicted && predicted <= upper);
    }
}

#[test]
fn e2e_live_flag_same_structure() {
    let plain = run_json(&["energy-forecast", "--seed", "5"]);
    let live = run_json(&["energy-forecast", "--seed", "5", "--live"]);

    assert_eq!(live["success"], true);
    assert_eq!(
        live["model_info"]["training_samples"],
        plain["model_info"]["training_samples"]
    );
    assert_eq!(
        live["forecast"].as_array().unwrap().len(),
        plain["forecast"].as_array().unwrap().len()
    );
    assert_eq!(
        live["historical"].as_array().unwrap().len(),
        plain["historical"].as_array().unwrap().len()
    );
}

#[test]
fn e2e_short_window_and_horizon() {
    let json = run_json(&["energy-forecast", "--days", "3", "--horizon", "6", "--seed", "1"]);

    assert_eq!(json["model_info"]["training_samples"], 73);
    assert_eq!(json["model_info"]["forecast_horizon_hours"], 6);
    assert_eq!(json["forecast"].as_array().unwrap().len(), 6);
    assert_eq!(json["historical"].as_array().unwrap().len(), 72);
}

#[test]
fn e2e_unknown_flag_prints_failure_document() {
    let response = match parse_args(["energy-forecast", "--bogus"]) {
        Ok(cli) => execute(&cli),
        Err(failure) => failure,
    };
    let json: Value = serde_json::from_str(&render(&response)).unwrap();

    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("--bogus"));
    assert!(json["generated_at"].is_string());
    assert!(json.get("forecast").is_none());
}

#[test]
fn e2e_oversized_window_prints_failure_document() {
    let json = run_json(&["energy-forecast", "--days", "100000000", "--seed", "1"]);

    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("window_days"));
    assert!(json.get("historical").is_none());
}
