//! API route handlers

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use forecast_facade::{try_run, PipelineSettings, SourceKind};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::AppState;

pub const SERVICE_NAME: &str = "energy-forecast";

#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    /// Only the literal `true` enables live data
    pub live: Option<String>,
}

impl ForecastQuery {
    pub fn is_live(&self) -> bool {
        self.live.as_deref() == Some("true")
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T12:00:00.123Z`
fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "timestamp": utc_timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Response {
    let started = Instant::now();
    let live = query.is_live();
    info!(live, "running forecast");

    let settings = PipelineSettings {
        source: SourceKind::from_live_flag(live),
        ..(*state.settings).clone()
    };

    let outcome = tokio::task::spawn_blocking(move || try_run(&settings)).await;

    let result = match outcome {
        Ok(Ok(response)) => serde_json::to_value(&response).map_err(|e| e.to_string()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => Err(format!("forecast task failed: {e}")),
    };
    let total_duration_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(mut body) => {
            // Failures from the model pass through untouched
            if body["success"] == true {
                body["server_info"] = json!({
                    "total_duration_ms": total_duration_ms,
                    "server_timestamp": utc_timestamp(),
                    "live_data": live,
                });
            }
            info!(total_duration_ms, "forecast completed");
            Json(body).into_response()
        }
        Err(message) => {
            error!(error = %message, "forecast error");
            let body = json!({
                "success": false,
                "error": message,
                "server_info": {
                    "total_duration_ms": total_duration_ms,
                    "server_timestamp": utc_timestamp(),
                },
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
