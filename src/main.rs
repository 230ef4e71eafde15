//! Binary entry point: serves the year-end bonus API.
//!
//! The configuration directory is read from `DECIMO_CONFIG` (default `./config`).

use decimo_engine::api::{AppState, create_router};
use decimo_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("DECIMO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir).map_err(|e| {
        tracing::error!("Failed to load configuration from {config_dir}: {e}");
        e
    })?;

    let addr = format!("{}:{}", config.server().host, config.server().port);
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Year-end bonus API listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
