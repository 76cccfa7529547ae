//! # energy-forecast
//!
//! Command-line front end: loads the trailing consumption window, forecasts
//! it and prints one JSON document on stdout.

use std::ffi::OsString;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use forecast_facade::{
    format_timestamp, now_local, try_run, ForecastResponse, GeneratorConfig, PipelineSettings,
    SourceKind,
};
use tracing::{error, warn};

#[derive(Debug, Parser)]
#[command(name = "energy-forecast", version)]
#[command(about = "Hourly energy consumption forecast", long_about = None)]
pub struct Cli {
    /// Request live data (not wired up yet, falls back to synthetic)
    #[arg(long)]
    pub live: bool,

    /// Hours to forecast past the last observation
    #[arg(
        long,
        env = "FORECAST_HORIZON_HOURS",
        default_value_t = 48,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub horizon: u32,

    /// Seed for the synthetic noise (random when omitted)
    #[arg(long, env = "FORECAST_SEED")]
    pub seed: Option<u64>,

    /// Days of history to train on
    #[arg(
        long,
        env = "FORECAST_HISTORY_DAYS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub days: u32,
}

impl Cli {
    pub fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            source: SourceKind::from_live_flag(self.live),
            seed: self.seed,
            horizon: self.horizon as usize,
            generator: GeneratorConfig {
                window_days: self.days,
                ..GeneratorConfig::default()
            },
            ..PipelineSettings::default()
        }
    }
}

/// Parse command-line arguments (with env fallbacks).
///
/// Help and version requests print and exit as usual. Any other argument
/// error comes back as a failure response so stdout still carries a JSON
/// document.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, ForecastResponse>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let message = e.to_string().trim_end().to_string();
            warn!(error = %message, "invalid arguments");
            Err(ForecastResponse::failure(message))
        }
    }
}

/// Run one forecast; errors here are the ones the forecaster could not fold
/// into a failure response.
pub fn run(cli: &Cli) -> anyhow::Result<ForecastResponse> {
    let settings = cli.settings();
    try_run(&settings).context("failed to load consumption data")
}

/// Top-level boundary: always produces a response.
pub fn execute(cli: &Cli) -> ForecastResponse {
    match run(cli) {
        Ok(response) => response,
        Err(e) => {
            error!(error = %format!("{e:#}"), "forecast run aborted");
            ForecastResponse::failure(format!("{e:#}"))
        }
    }
}

/// Pretty JSON for stdout, or a minimal failure document if serialization
/// itself fails.
pub fn render(response: &ForecastResponse) -> String {
    response.to_json_pretty().unwrap_or_else(|e| {
        let fallback = serde_json::json!({
            "success": false,
            "error": format!("failed to serialize response: {e}"),
            "generated_at": format_timestamp(&now_local()),
        });
        serde_json::to_string_pretty(&fallback).unwrap_or_else(|_| fallback.to_string())
    })
}
