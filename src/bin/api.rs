use anyhow::{Context, Result};
use sponsorscan::{
    app_state::AppState,
    config::{Config, keywords},
    detector::{DetectionPipeline, KeywordMatcher},
    http,
    provider::YouTubeProvider,
    telemetry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log_format());
    info!(?config, "Starting sponsorscan api");

    let keywords = keywords::load_or_empty(config.keywords_path());
    let provider = YouTubeProvider::new(config.provider_settings())
        .context("Failed to build metadata provider")?;
    let pipeline = DetectionPipeline::new(Arc::new(provider), KeywordMatcher::new(keywords));

    let state = AppState::new(pipeline)
        .with_verify_token(config.verify_token().map(str::to_string));
    let app = http::router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    info!(addr = config.bind_addr(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
