//! energy-forecast binary

use energy_forecast::{execute, parse_args, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the JSON document
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "warn,energy_forecast=info,forecast_facade=info,forecast_api=info".into()
            }),
        )
        .init();

    let response = match parse_args(std::env::args_os()) {
        Ok(cli) => execute(&cli),
        Err(failure) => failure,
    };
    println!("{}", render(&response));
}
