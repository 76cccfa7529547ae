//! # forecast-server
//!
//! HTTP front end for the energy forecast. Each request runs the
//! synchronous pipeline on the blocking pool.

use std::env;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use forecast_facade::PipelineSettings;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod routes;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Application state shared across handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Bearer token required on the forecast route; `None` leaves it open
    pub api_key: Option<Arc<str>>,
    pub settings: Arc<PipelineSettings>,
}

impl AppState {
    pub fn new(settings: PipelineSettings, api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Into::into),
            settings: Arc::new(settings),
        }
    }

    /// Default pipeline settings, key from `FORECAST_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(PipelineSettings::default(), env::var("FORECAST_API_KEY").ok())
    }
}

/// Build the router with middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/forecast", get(routes::forecast))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/health", get(routes::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
