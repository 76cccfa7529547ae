//! forecast-server binary

use std::env;
use std::net::SocketAddr;

use forecast_server::{router, AppState, DEFAULT_HOST, DEFAULT_PORT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "warn,forecast_server=info,forecast_facade=info,tower_http=info".into()
            }),
        )
        .init();

    let state = AppState::from_env();
    if state.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("no API key configured, forecast endpoint is public");
    }

    // Server configuration from environment
    let host = env::var("FORECAST_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = match env::var("FORECAST_PORT") {
        Ok(value) => value
            .parse()
            .map_err(|e| format!("FORECAST_PORT must be a valid port number: {e}"))?,
        Err(_) => DEFAULT_PORT,
    };
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| format!("invalid FORECAST_HOST:FORECAST_PORT configuration: {e}"))?;

    tracing::info!("forecast-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
